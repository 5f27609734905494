//! Operations team — the anomaly-handling adapter
//!
//! Logs every notice and keeps an in-memory ledger of them so a caller
//! (or a test) can see what was raised during a run.

use std::sync::Mutex;

use serde::Serialize;
use tracing::warn;

use crate::application::ports::AnomalyHandler;
use crate::domain::{Charge, Vehicle};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    Investigation { vehicle: Vehicle },
    Penalty { vehicle: Vehicle, amount: Charge },
}

#[derive(Debug, Default)]
pub struct OperationsTeam {
    notices: Mutex<Vec<Notice>>,
}

impl OperationsTeam {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notice raised so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.ledger().clone()
    }

    fn ledger(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl AnomalyHandler for OperationsTeam {
    fn investigate(&self, vehicle: &Vehicle) {
        warn!(registration = vehicle.registration(), "Investigation opened");
        self.ledger().push(Notice::Investigation {
            vehicle: vehicle.clone(),
        });
    }

    fn issue_penalty_notice(&self, vehicle: &Vehicle, amount: Charge) {
        warn!(registration = vehicle.registration(), amount = %amount, "Penalty notice issued");
        self.ledger().push(Notice::Penalty {
            vehicle: vehicle.clone(),
            amount,
        });
    }
}

// ── Tests ──────────────────────────────────────────────────────
