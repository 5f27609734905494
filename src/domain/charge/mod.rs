//! Charge aggregate
//!
//! Rate policy, charge breakdown and the free-return-window calculation.

pub mod model;

pub use model::{Charge, ChargeBreakdown, ChargeLine, ChargePolicy, RateBand};
