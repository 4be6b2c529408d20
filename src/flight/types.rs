//! Flight and segment data types.
//!
//! A flight is a named itinerary composed of travel segments. Segment order
//! as provided by a source is not assumed to be temporal; consumers that
//! need departure order take a sorted view via
//! [`Flight::segments_by_departure`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One leg of a flight.
///
/// Temporal validity (arrival after departure) is deliberately not enforced
/// here: inverted segments are expected in input data and are detected by
/// the qualification rules, not rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Scheduled departure of this leg.
    pub departure_date: DateTime<Utc>,

    /// Scheduled arrival of this leg.
    pub arrival_date: DateTime<Utc>,
}

impl Segment {
    /// Creates a segment from departure and arrival timestamps.
    pub fn new(departure_date: DateTime<Utc>, arrival_date: DateTime<Utc>) -> Self {
        Self {
            departure_date,
            arrival_date,
        }
    }
}

/// A named itinerary composed of one or more ordered segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Display label; not unique across flights.
    pub name: String,

    /// Segments in source order.
    pub segments: Vec<Segment>,
}

impl Flight {
    /// Creates a flight from a name and its segments.
    pub fn new(name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            name: name.into(),
            segments,
        }
    }

    /// Segments sorted ascending by departure time, as references into the
    /// stored sequence. The stored order is never mutated.
    pub fn segments_by_departure(&self) -> Vec<&Segment> {
        let mut ordered: Vec<&Segment> = self.segments.iter().collect();
        ordered.sort_by_key(|s| s.departure_date);
        ordered
    }

    /// Earliest scheduled departure across all segments, if any.
    pub fn first_departure(&self) -> Option<DateTime<Utc>> {
        self.segments.iter().map(|s| s.departure_date).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_segments_by_departure_sorts_without_mutating() {
        let late = Segment::new(base() + Duration::hours(5), base() + Duration::hours(7));
        let early = Segment::new(base(), base() + Duration::hours(2));
        let flight = Flight::new("out of order", vec![late.clone(), early.clone()]);

        let ordered = flight.segments_by_departure();
        assert_eq!(ordered, vec![&early, &late]);
        // Stored order untouched
        assert_eq!(flight.segments, vec![late, early]);
    }

    #[test]
    fn test_first_departure_picks_minimum() {
        let flight = Flight::new(
            "two legs",
            vec![
                Segment::new(base() + Duration::hours(3), base() + Duration::hours(4)),
                Segment::new(base(), base() + Duration::hours(1)),
            ],
        );
        assert_eq!(flight.first_departure(), Some(base()));

        let empty = Flight::new("empty", vec![]);
        assert_eq!(empty.first_departure(), None);
    }

    #[test]
    fn test_segment_wire_names_are_camel_case() {
        let segment = Segment::new(base(), base() + Duration::hours(2));
        let json = serde_json::to_string(&segment).unwrap();
        assert!(json.contains("\"departureDate\""));
        assert!(json.contains("\"arrivalDate\""));

        let back: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, segment);
    }
}
