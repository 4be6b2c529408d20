//! Flight data sources.
//!
//! The pipeline makes no assumption about how its input is produced; this
//! module provides the two concrete sources: a deterministic in-memory
//! fixture set and a JSON document loader.

mod fixture;
mod json;

pub use fixture::fixture_flights;
pub use json::load_flights;
