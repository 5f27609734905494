//! Application ports (hexagonal architecture boundaries)
//!
//! The clock port is a domain contract and lives in `domain::ports`.
//! Outbound ports for settlement and anomaly handling live here.

pub mod outbound;

pub use crate::domain::ports::Clock;
pub use outbound::{AnomalyHandler, Settlement};
