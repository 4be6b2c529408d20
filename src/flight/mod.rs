//! Flight itinerary data types.

mod types;

pub use types::{Flight, Segment};
