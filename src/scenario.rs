//! Replayable billing scenarios
//!
//! A scenario is a JSON document listing registered accounts and the
//! crossings seen by the cameras, in the order they happened:
//!
//! ```json
//! {
//!   "accounts": [{ "owner": "Jane", "registration": "A123 XYZ", "balance": "20.00" }],
//!   "crossings": [
//!     { "kind": "entry", "registration": "A123 XYZ", "timestamp": "2018-01-01T09:00:00" },
//!     { "kind": "exit",  "registration": "A123 XYZ", "timestamp": "2018-01-01T10:00:00" }
//!   ]
//! }
//! ```

use std::path::Path;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::application::EventLog;
use crate::domain::{CrossingKind, Vehicle};
use crate::infrastructure::{Account, ControllableClock, InMemoryAccounts};
use crate::support::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    pub owner: String,
    pub registration: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrossingRecord {
    pub kind: CrossingKind,
    pub registration: String,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub accounts: Vec<AccountRecord>,
    pub crossings: Vec<CrossingRecord>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Scenario(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn accounts(&self) -> InMemoryAccounts {
        self.accounts
            .iter()
            .map(|a| {
                Account::new(
                    a.owner.clone(),
                    Vehicle::with_registration(a.registration.clone()),
                    a.balance,
                )
            })
            .collect()
    }

    /// Feed every crossing through the event log, driving the clock to each
    /// crossing's timestamp first. Exits for unseen vehicles are dropped just
    /// as they would be live.
    pub fn replay(&self) -> EventLog {
        let clock = ControllableClock::new();
        let mut log = EventLog::new();
        let mut dropped = 0usize;

        for crossing in &self.crossings {
            clock.set(crossing.timestamp);
            let vehicle = Vehicle::with_registration(crossing.registration.clone());
            match crossing.kind {
                CrossingKind::Entry => log.record_entry(vehicle, &clock),
                CrossingKind::Exit => {
                    if !log.record_exit(vehicle, &clock) {
                        dropped += 1;
                    }
                }
            }
        }

        info!(recorded = log.len(), dropped, "Scenario replayed");
        log
    }
}

// ── Tests ──────────────────────────────────────────────────────
