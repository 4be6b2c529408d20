//! Ground-stop evaluation between consecutive segments.

use chrono::Duration;

use crate::flight::Segment;

/// Longest tolerated ground stop, in minutes. A gap of exactly this long
/// already disqualifies.
const MAX_GROUND_STOP_MINUTES: i64 = 120;

/// Decides whether the ground stop following `current` is acceptable.
///
/// `ordered` must be sorted ascending by departure time. `current` is
/// located in it by identity, not value equality, so duplicated segment
/// values resolve to the occurrence actually passed in. A segment with no
/// successor has no outbound gap and is always acceptable; a segment not
/// found in `ordered` at all is treated the same way.
pub fn ground_stop_acceptable(ordered: &[&Segment], current: &Segment) -> bool {
    let position = ordered.iter().position(|s| std::ptr::eq(*s, current));

    let next = match position.and_then(|i| ordered.get(i + 1)) {
        Some(next) => next,
        None => return true,
    };

    let gap = next.departure_date - current.arrival_date;
    gap < Duration::minutes(MAX_GROUND_STOP_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap()
    }

    fn segment(departure_min: i64, arrival_min: i64) -> Segment {
        Segment::new(
            base() + Duration::minutes(departure_min),
            base() + Duration::minutes(arrival_min),
        )
    }

    #[test]
    fn test_last_segment_has_no_gap_to_evaluate() {
        let a = segment(0, 60);
        let b = segment(90, 180);
        let ordered = vec![&a, &b];

        assert!(ground_stop_acceptable(&ordered, &b));
    }

    #[test]
    fn test_gap_under_two_hours_is_acceptable() {
        let a = segment(0, 60);
        // Departs 1h59m after the first arrival
        let b = segment(179, 240);
        let ordered = vec![&a, &b];

        assert!(ground_stop_acceptable(&ordered, &a));
    }

    #[test]
    fn test_gap_of_exactly_two_hours_disqualifies() {
        let a = segment(0, 60);
        let b = segment(180, 240);
        let ordered = vec![&a, &b];

        assert!(!ground_stop_acceptable(&ordered, &a));
    }

    #[test]
    fn test_gap_over_two_hours_disqualifies() {
        let a = segment(0, 60);
        let b = segment(181, 240);
        let ordered = vec![&a, &b];

        assert!(!ground_stop_acceptable(&ordered, &a));
    }

    #[test]
    fn test_overlapping_segments_are_acceptable() {
        // Next leg departs before the current one lands; the gap is
        // negative, which is not a ground-stop violation.
        let a = segment(0, 120);
        let b = segment(60, 200);
        let ordered = vec![&a, &b];

        assert!(ground_stop_acceptable(&ordered, &a));
    }

    #[test]
    fn test_value_equal_duplicates_resolve_by_identity() {
        // Two identical short hops followed by a leg far in the future. The
        // first occurrence has an acceptable zero gap to the second; only
        // the second occurrence faces the oversized gap.
        let first = segment(0, 60);
        let duplicate = segment(0, 60);
        let far = segment(600, 700);
        let ordered = vec![&first, &duplicate, &far];

        assert_eq!(first, duplicate);
        assert!(ground_stop_acceptable(&ordered, &first));
        assert!(!ground_stop_acceptable(&ordered, &duplicate));
    }

    #[test]
    fn test_segment_not_in_sequence_defaults_to_acceptable() {
        let a = segment(0, 60);
        let b = segment(90, 180);
        let ordered = vec![&a, &b];
        let stray = segment(0, 60);

        assert!(ground_stop_acceptable(&ordered, &stray));
    }
}
