//! Wall-clock time source

use chrono::{Local, NaiveDateTime};

use crate::domain::Clock;

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
