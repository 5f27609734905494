//! Vehicle value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// A vehicle identified by its registration.
///
/// The registration is kept verbatim: no case folding, no whitespace
/// normalisation. Two vehicles are equal when their registrations are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vehicle {
    registration: String,
}

impl Vehicle {
    pub fn with_registration(registration: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
        }
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vehicle [{}]", self.registration)
    }
}

// ── Tests ──────────────────────────────────────────────────────
