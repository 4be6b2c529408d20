//! Disqualifying rules for flight qualification.
//!
//! Each rule answers "does this flight have a problem of this kind?". The
//! pipeline combines rules with logical OR, so evaluation order never
//! affects the outcome. Adding a rule means adding a variant here and an
//! arm in [`Rule::violates`]; the pipeline control flow is untouched.

use chrono::{DateTime, Utc};

use crate::flight::Flight;

use super::ground_stop::ground_stop_acceptable;

/// A disqualifying rule. A flight is excluded when any rule matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Matches flights with a segment departing strictly before the
    /// reference instant. The instant is captured once per run and carried
    /// here explicitly so every flight sees the same "now".
    PastDeparture { now: DateTime<Utc> },

    /// Matches flights with a segment arriving strictly before its own
    /// departure.
    InvertedSegment,

    /// Matches flights with an oversized ground stop between consecutive
    /// segments, evaluated over the departure-sorted segment list.
    ExcessiveGroundStop,
}

impl Rule {
    /// The standard rule set evaluated against every flight.
    pub fn standard(now: DateTime<Utc>) -> Vec<Rule> {
        vec![
            Rule::PastDeparture { now },
            Rule::InvertedSegment,
            Rule::ExcessiveGroundStop,
        ]
    }

    /// Returns true when `flight` has a problem of this rule's kind.
    pub fn violates(&self, flight: &Flight) -> bool {
        match self {
            Rule::PastDeparture { now } => flight
                .segments
                .iter()
                .any(|s| s.departure_date < *now),
            Rule::InvertedSegment => flight
                .segments
                .iter()
                .any(|s| s.arrival_date < s.departure_date),
            Rule::ExcessiveGroundStop => {
                let ordered = flight.segments_by_departure();
                flight
                    .segments
                    .iter()
                    .any(|s| !ground_stop_acceptable(&ordered, s))
            }
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rule::PastDeparture { .. } => "past departure",
            Rule::InvertedSegment => "inverted segment",
            Rule::ExcessiveGroundStop => "excessive ground stop",
        };
        write!(f, "{}", name)
    }
}
