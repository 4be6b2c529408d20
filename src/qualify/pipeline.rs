//! Qualification pipeline: NOR-composition of disqualifying rules.

use tracing::{debug, info};

use crate::error::QualifyError;
use crate::flight::Flight;

use super::rules::Rule;

/// Filters `flights` down to those matching none of `rules`.
///
/// The filter is stable: survivors keep their input order. An empty flight
/// list short-circuits to an empty result; an empty rule set returns the
/// input unchanged. Once both inputs are non-trivially present, a flight
/// with zero segments aborts the run with a data-integrity error rather
/// than being silently dropped.
pub fn qualify_flights(rules: &[Rule], flights: Vec<Flight>) -> Result<Vec<Flight>, QualifyError> {
    if flights.is_empty() || rules.is_empty() {
        return Ok(flights);
    }

    if let Some(malformed) = flights.iter().find(|f| f.segments.is_empty()) {
        return Err(QualifyError::EmptyFlight {
            name: malformed.name.clone(),
        });
    }

    let total = flights.len();
    let retained: Vec<Flight> = flights
        .into_iter()
        .filter(|flight| match rules.iter().find(|r| r.violates(flight)) {
            Some(rule) => {
                debug!(flight = %flight.name, rule = %rule, "flight disqualified");
                false
            }
            None => true,
        })
        .collect();

    info!(
        total,
        retained = retained.len(),
        dropped = total - retained.len(),
        "qualification complete"
    );
    Ok(retained)
}
