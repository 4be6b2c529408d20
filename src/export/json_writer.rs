//! JSON result writer for qualified flights.
//!
//! The sink receives the filtered sequence once, in filtered order, and
//! produces a single `{"flights": [...]}` document.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::ExportError;
use crate::flight::Flight;

#[derive(Debug, Serialize)]
struct FlightDocument<'a> {
    flights: &'a [Flight],
}

/// Renders the result document as a JSON string.
pub fn render_result(flights: &[Flight], pretty: bool) -> Result<String, ExportError> {
    let document = FlightDocument { flights };

    let json = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Writes the result document to `path`, creating parent directories as
/// needed. One write per run; there is no append or partial-output mode.
pub fn write_result(
    flights: &[Flight],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), ExportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = render_result(flights, pretty)?;
    std::fs::write(path, json)?;

    info!(path = %path.display(), flights = flights.len(), "result artifact written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::Segment;
    use chrono::{Duration, TimeZone, Utc};

    fn sample_flights() -> Vec<Flight> {
        let base = Utc.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap();
        vec![Flight::new(
            "morning hop",
            vec![Segment::new(base, base + Duration::hours(2))],
        )]
    }

    #[test]
    fn test_render_wraps_flights_in_a_document() {
        let json = render_result(&sample_flights(), false).unwrap();

        assert!(json.starts_with("{\"flights\":["));
        assert!(json.contains("\"morning hop\""));
        assert!(json.contains("\"departureDate\""));
    }

    #[test]
    fn test_render_pretty_is_multiline() {
        let compact = render_result(&sample_flights(), false).unwrap();
        let pretty = render_result(&sample_flights(), true).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("result").join("result.json");

        write_result(&sample_flights(), &path, false).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_result(&sample_flights(), false).unwrap());
    }

    #[test]
    fn test_empty_result_is_still_a_valid_document() {
        let json = render_result(&[], false).unwrap();
        assert_eq!(json, r#"{"flights":[]}"#);
    }
}
