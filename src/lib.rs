//! # Zone Billing
//!
//! Billing engine for a monitored zone: cameras record vehicles crossing
//! the boundary, and each billing run turns every vehicle's crossings into
//! a charge or an anomaly report.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: vehicles, crossing events, the charge policy and the clock port
//! - **application**: the event log, per-vehicle classification and the billing run
//! - **infrastructure**: clocks, in-memory accounts, the operations team
//! - **config**: TOML configuration
//! - **scenario**: JSON replay of recorded crossings

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod scenario;
pub mod support;

pub use config::{default_config_path, AppConfig};

pub use application::{AnomalyHandler, BillingReport, BillingService, EventLog, Settlement};
pub use domain::{Charge, ChargePolicy, Clock, CrossingEvent, CrossingKind, Vehicle};
pub use support::errors::{AppError, ConfigError, DomainError, SettlementError};
