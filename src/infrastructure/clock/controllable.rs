//! Settable time source for tests and replays

use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::Clock;

/// A clock that only moves when told to.
///
/// Starts at 2018-01-01 00:00:00 and reports whatever was last [`set`](Self::set).
#[derive(Debug)]
pub struct ControllableClock {
    now: Mutex<NaiveDateTime>,
}

impl ControllableClock {
    pub fn new() -> Self {
        let start = NaiveDate::from_ymd_opt(2018, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.lock() = now;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NaiveDateTime> {
        // The guarded value is plain data; a poisoned lock still holds a valid time.
        self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ControllableClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ControllableClock {
    fn now(&self) -> NaiveDateTime {
        *self.lock()
    }
}

// ── Tests ──────────────────────────────────────────────────────
