pub mod crossing;
pub mod ports;
pub mod services;

// Re-export key types for convenience
pub use crossing::{group_by_vehicle, is_well_ordered, EventLog};
pub use ports::{AnomalyHandler, Clock, Settlement};
pub use services::{BillingReport, BillingService, OutcomeKind, VehicleOutcome};
