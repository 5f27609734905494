//! Per-vehicle grouping and ordering checks

use std::collections::HashMap;

use crate::domain::{CrossingEvent, Vehicle};

/// Split the log into one ordered sequence per vehicle.
///
/// Order inside each group follows the log; order between groups is
/// unspecified.
pub fn group_by_vehicle(events: &[CrossingEvent]) -> HashMap<Vehicle, Vec<CrossingEvent>> {
    let mut groups: HashMap<Vehicle, Vec<CrossingEvent>> = HashMap::new();
    for event in events {
        groups
            .entry(event.vehicle().clone())
            .or_default()
            .push(event.clone());
    }
    groups
}

/// `true` when the crossings alternate entry/exit and never go back in time.
///
/// Sequences of zero or one crossing are trivially well ordered.
pub fn is_well_ordered(crossings: &[CrossingEvent]) -> bool {
    crossings.windows(2).all(|pair| {
        let (prev, curr) = (&pair[0], &pair[1]);
        curr.timestamp() >= prev.timestamp() && curr.kind() != prev.kind()
    })
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 1, 1)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    fn entry(reg: &str, hour: u32) -> CrossingEvent {
        CrossingEvent::entry(Vehicle::with_registration(reg), at(hour))
    }

    fn exit(reg: &str, hour: u32) -> CrossingEvent {
        CrossingEvent::exit(Vehicle::with_registration(reg), at(hour))
    }

    #[test]
    fn groups_preserve_log_order() {
        let log = vec![
            entry("A123 XYZ", 9),
            entry("J091 4PY", 9),
            exit("A123 XYZ", 10),
            exit("J091 4PY", 11),
            entry("A123 XYZ", 12),
        ];
        let groups = group_by_vehicle(&log);

        assert_eq!(groups.len(), 2);
        let a = &groups[&Vehicle::with_registration("A123 XYZ")];
        assert_eq!(
            a,
            &vec![
                entry("A123 XYZ", 9),
                exit("A123 XYZ", 10),
                entry("A123 XYZ", 12),
            ]
        );
        let j = &groups[&Vehicle::with_registration("J091 4PY")];
        assert_eq!(j.len(), 2);
    }

    #[test]
    fn empty_log_has_no_groups() {
        assert!(group_by_vehicle(&[]).is_empty());
    }

    #[test]
    fn short_sequences_are_well_ordered() {
        assert!(is_well_ordered(&[]));
        assert!(is_well_ordered(&[entry("A123 XYZ", 9)]));
        assert!(is_well_ordered(&[exit("A123 XYZ", 9)]));
    }

    #[test]
    fn alternating_sequence_is_well_ordered() {
        assert!(is_well_ordered(&[
            entry("A123 XYZ", 9),
            exit("A123 XYZ", 10),
            entry("A123 XYZ", 11),
            exit("A123 XYZ", 12),
        ]));
    }

    #[test]
    fn equal_timestamps_are_allowed() {
        assert!(is_well_ordered(&[entry("A123 XYZ", 9), exit("A123 XYZ", 9)]));
    }

    #[test]
    fn double_entry_is_anomalous() {
        assert!(!is_well_ordered(&[entry("A123 XYZ", 9), entry("A123 XYZ", 10)]));
    }

    #[test]
    fn double_exit_is_anomalous() {
        assert!(!is_well_ordered(&[
            entry("A123 XYZ", 9),
            exit("A123 XYZ", 10),
            exit("A123 XYZ", 11),
        ]));
    }

    #[test]
    fn time_going_backwards_is_anomalous() {
        assert!(!is_well_ordered(&[entry("A123 XYZ", 14), exit("A123 XYZ", 12)]));
    }
}
