//! Application services

mod billing;

pub use billing::{BillingReport, BillingService, OutcomeKind, VehicleOutcome};
