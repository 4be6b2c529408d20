//! Deterministic fixture flights.
//!
//! Six itineraries anchored three days after a supplied reference instant:
//! a clean hop, a clean multi-leg connection, and one offender for each
//! disqualifying rule (plus a second ground-stop offender with the gap in
//! the middle of a longer chain).

use chrono::{DateTime, Duration, Utc};

use crate::flight::{Flight, Segment};

/// Builds the canonical fixture set relative to `reference`.
///
/// Every timestamp derives from the single `reference` instant, so fixture
/// construction can never straddle a time boundary mid-run.
pub fn fixture_flights(reference: DateTime<Utc>) -> Vec<Flight> {
    let base = reference + Duration::days(3);

    vec![
        Flight::new(
            "two-hour hop",
            vec![Segment::new(base, base + Duration::hours(2))],
        ),
        Flight::new(
            "one-hour connection",
            vec![
                Segment::new(base, base + Duration::hours(2)),
                Segment::new(base + Duration::hours(3), base + Duration::hours(5)),
            ],
        ),
        Flight::new(
            "departed six days ago",
            vec![Segment::new(base - Duration::days(6), base)],
        ),
        Flight::new(
            "arrives before it departs",
            vec![Segment::new(base, base - Duration::hours(6))],
        ),
        Flight::new(
            "three-hour layover",
            vec![
                Segment::new(base, base + Duration::hours(2)),
                Segment::new(base + Duration::hours(5), base + Duration::hours(6)),
            ],
        ),
        Flight::new(
            "late three-hour layover",
            vec![
                Segment::new(base, base + Duration::hours(2)),
                Segment::new(base + Duration::hours(3), base + Duration::hours(5)),
                Segment::new(base + Duration::hours(8), base + Duration::hours(9)),
            ],
        ),
    ]
}
