pub mod charge;
pub mod crossing;
pub mod ports;
pub mod vehicle;

// Re-export commonly used types
pub use charge::{Charge, ChargeBreakdown, ChargeLine, ChargePolicy, RateBand};
pub use crossing::{CrossingEvent, CrossingKind};
pub use ports::Clock;
pub use vehicle::Vehicle;

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
