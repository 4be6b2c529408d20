//! Error types for flight-filter operations.
//!
//! Defines error types for the major subsystems:
//! - Flight qualification (data-integrity failures)
//! - Flight sources (JSON document loading)
//! - Result artifact export

use thiserror::Error;

/// Errors that can occur during flight qualification.
#[derive(Debug, Error)]
pub enum QualifyError {
    /// A flight arrived from the source with no segments. This is a
    /// data-integrity failure in the input, not a filtering condition: the
    /// run aborts instead of silently dropping the flight.
    #[error("data integrity violation: flight '{name}' has no segments")]
    EmptyFlight { name: String },
}

/// Errors that can occur while loading flights from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The document parsed, but its `flights` collection is missing or null.
    /// Distinct from [`QualifyError::EmptyFlight`]: this concerns the
    /// arguments' presence, not their content.
    #[error("invalid argument: input document has no 'flights' collection")]
    MissingFlights,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while writing the result artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
