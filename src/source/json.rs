//! JSON document flight source.
//!
//! Accepts a `{"flights": [...]}` document, the same shape the result sink
//! writes, so a previous run's artifact can be edited and fed back in.

use std::path::Path;

use serde::Deserialize;

use crate::error::SourceError;
use crate::flight::Flight;

#[derive(Debug, Deserialize)]
struct FlightDocument {
    #[serde(default)]
    flights: Option<Vec<Flight>>,
}

/// Loads flights from the JSON document at `path`.
///
/// A document whose `flights` collection is missing or null is rejected as
/// an invalid argument; an empty array is a valid, empty input.
pub fn load_flights(path: impl AsRef<Path>) -> Result<Vec<Flight>, SourceError> {
    let raw = std::fs::read_to_string(path)?;
    let document: FlightDocument = serde_json::from_str(&raw)?;

    document.flights.ok_or(SourceError::MissingFlights)
}
