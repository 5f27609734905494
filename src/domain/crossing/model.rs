//! Zone boundary crossing entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::Vehicle;

/// Direction of a boundary crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossingKind {
    /// Vehicle drove into the zone
    Entry,
    /// Vehicle drove out of the zone
    Exit,
}

impl CrossingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Exit => "exit",
        }
    }
}

impl std::fmt::Display for CrossingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded crossing of the zone boundary.
///
/// Immutable once built; the event log only ever appends these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossingEvent {
    Entry {
        vehicle: Vehicle,
        timestamp: NaiveDateTime,
    },
    Exit {
        vehicle: Vehicle,
        timestamp: NaiveDateTime,
    },
}

impl CrossingEvent {
    pub fn new(kind: CrossingKind, vehicle: Vehicle, timestamp: NaiveDateTime) -> Self {
        match kind {
            CrossingKind::Entry => Self::Entry { vehicle, timestamp },
            CrossingKind::Exit => Self::Exit { vehicle, timestamp },
        }
    }

    pub fn entry(vehicle: Vehicle, timestamp: NaiveDateTime) -> Self {
        Self::Entry { vehicle, timestamp }
    }

    pub fn exit(vehicle: Vehicle, timestamp: NaiveDateTime) -> Self {
        Self::Exit { vehicle, timestamp }
    }

    pub fn kind(&self) -> CrossingKind {
        match self {
            Self::Entry { .. } => CrossingKind::Entry,
            Self::Exit { .. } => CrossingKind::Exit,
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        match self {
            Self::Entry { vehicle, .. } | Self::Exit { vehicle, .. } => vehicle,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        match self {
            Self::Entry { timestamp, .. } | Self::Exit { timestamp, .. } => *timestamp,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
