use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Charge, Vehicle};

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation: {0}")]
    Validation(String),
}

/// Why a settlement could not take the charge
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error("Insufficient credit: {required} required, {available} available")]
    InsufficientCredit { required: Charge, available: Charge },

    #[error("No account registered for {0}")]
    AccountNotRegistered(Vehicle),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] DomainError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
