//! Clock port — where crossing timestamps come from
//!
//! Recording an entry or exit without an explicit timestamp asks a
//! [`Clock`] for the current time. Production wiring uses
//! [`SystemClock`](crate::infrastructure::clock::SystemClock); tests use
//! [`ControllableClock`](crate::infrastructure::clock::ControllableClock).

use chrono::NaiveDateTime;

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
