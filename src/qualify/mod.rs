//! Flight qualification pipeline.
//!
//! This module evaluates flights against a fixed set of disqualifying rules
//! and retains only the flights that match none of them.

mod ground_stop;
mod pipeline;
mod rules;

pub use ground_stop::ground_stop_acceptable;
pub use pipeline::qualify_flights;
pub use rules::Rule;
