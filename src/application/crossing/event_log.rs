//! Append-only log of zone boundary crossings

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{Clock, CrossingEvent, CrossingKind, Vehicle};

/// Insertion-ordered record of every crossing seen by the cameras.
///
/// Entries are never removed or rewritten. Lookups are whole-log scans;
/// the per-vehicle view is rebuilt by each billing run.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<CrossingEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry stamped with `clock`'s current time.
    pub fn record_entry(&mut self, vehicle: Vehicle, clock: &dyn Clock) {
        self.record_entry_at(vehicle, clock.now());
    }

    /// Record an entry at an explicit time. Always appends.
    pub fn record_entry_at(&mut self, vehicle: Vehicle, timestamp: NaiveDateTime) {
        self.append(CrossingKind::Entry, vehicle, timestamp);
    }

    /// Record an exit stamped with `clock`'s current time.
    ///
    /// See [`record_exit_at`](Self::record_exit_at).
    pub fn record_exit(&mut self, vehicle: Vehicle, clock: &dyn Clock) -> bool {
        self.record_exit_at(vehicle, clock.now())
    }

    /// Record an exit at an explicit time.
    ///
    /// Only vehicles that already appear in the log get an exit; for an
    /// unseen vehicle the call does nothing and returns `false`.
    pub fn record_exit_at(&mut self, vehicle: Vehicle, timestamp: NaiveDateTime) -> bool {
        if !self.previously_seen(&vehicle) {
            debug!(
                registration = vehicle.registration(),
                %timestamp,
                "Exit ignored for unseen vehicle"
            );
            return false;
        }
        self.append(CrossingKind::Exit, vehicle, timestamp);
        true
    }

    /// Every recorded crossing, oldest first.
    pub fn all_events(&self) -> &[CrossingEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn previously_seen(&self, vehicle: &Vehicle) -> bool {
        self.events.iter().any(|e| e.vehicle() == vehicle)
    }

    fn append(&mut self, kind: CrossingKind, vehicle: Vehicle, timestamp: NaiveDateTime) {
        debug!(
            registration = vehicle.registration(),
            %kind,
            %timestamp,
            "Crossing recorded"
        );
        self.events.push(CrossingEvent::new(kind, vehicle, timestamp));
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::infrastructure::clock::ControllableClock;

    fn plate(reg: &str) -> Vehicle {
        Vehicle::with_registration(reg)
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 1, 1)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap()
    }

    #[test]
    fn new_events_are_appended_in_order() {
        let clock = ControllableClock::new();
        let mut log = EventLog::new();
        assert!(log.is_empty());

        clock.set(at(9));
        log.record_entry(plate("A123 XYZ"), &clock);
        assert_eq!(log.len(), 1);

        clock.set(at(10));
        assert!(log.record_exit(plate("A123 XYZ"), &clock));
        assert_eq!(log.len(), 2);

        let events = log.all_events();
        assert_eq!(events[0].kind(), CrossingKind::Entry);
        assert_eq!(events[1].kind(), CrossingKind::Exit);
        assert!(events[0].timestamp() < events[1].timestamp());
    }

    #[test]
    fn exit_for_unseen_vehicle_is_dropped() {
        let clock = ControllableClock::new();
        let mut log = EventLog::new();

        assert!(!log.record_exit(plate("A987 XYZ"), &clock));
        assert!(log.is_empty());

        log.record_entry(plate("A123 XYZ"), &clock);
        assert!(!log.record_exit(plate("A987 XYZ"), &clock));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn exit_only_needs_a_prior_event_of_any_kind() {
        let clock = ControllableClock::new();
        let mut log = EventLog::new();

        log.record_entry(plate("A123 XYZ"), &clock);
        assert!(log.record_exit(plate("A123 XYZ"), &clock));
        // No open entry any more, but the vehicle has been seen.
        assert!(log.record_exit(plate("A123 XYZ"), &clock));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn entries_always_append() {
        let clock = ControllableClock::new();
        let mut log = EventLog::new();
        log.record_entry(plate("A123 XYZ"), &clock);
        log.record_entry(plate("A123 XYZ"), &clock);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn explicit_timestamps_are_kept() {
        let ts = at(13);
        let mut log = EventLog::new();
        log.record_entry_at(plate("A123 XYZ"), ts);
        assert_eq!(log.all_events()[0].timestamp(), ts);
    }
}
