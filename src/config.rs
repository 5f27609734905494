//! Configuration module
//!
//! Reads `config.toml` (default `~/.config/zone-billing/config.toml`).
//! Every section is optional; a missing file means defaults.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "plain"   # or "json"
//!
//! [charging]
//! free_window_hours = 4
//! peak_cutoff_hour = 14
//! peak_rate = "6.00"
//! off_peak_rate = "4.00"
//! overstay_rate = "12.00"
//! ```

use std::path::{Path, PathBuf};

use chrono::Duration;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::ChargePolicy;
use crate::support::errors::ConfigError;

/// Default config location under the user's config directory
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zone-billing")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub charging: ChargingConfig,
}

impl AppConfig {
    /// Load from `path`. A missing file yields the defaults; a present but
    /// malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&raw).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.charging.to_policy()?;
        Ok(config)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `zone_billing=debug`
    pub level: String,
    /// `plain` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "plain".to_string(),
        }
    }
}

/// Rate policy as written in the config file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChargingConfig {
    pub free_window_hours: i64,
    pub peak_cutoff_hour: u32,
    pub peak_rate: Decimal,
    pub off_peak_rate: Decimal,
    pub overstay_rate: Decimal,
}

impl Default for ChargingConfig {
    fn default() -> Self {
        let policy = ChargePolicy::default();
        Self {
            free_window_hours: policy.free_window.num_hours(),
            peak_cutoff_hour: policy.peak_cutoff_hour,
            peak_rate: policy.peak_rate,
            off_peak_rate: policy.off_peak_rate,
            overstay_rate: policy.overstay_rate,
        }
    }
}

impl ChargingConfig {
    pub fn to_policy(&self) -> Result<ChargePolicy, ConfigError> {
        let free_window = Duration::try_hours(self.free_window_hours).ok_or_else(|| {
            crate::domain::DomainError::Validation(format!(
                "free_window_hours {} is out of range",
                self.free_window_hours
            ))
        })?;

        let policy = ChargePolicy {
            free_window,
            peak_cutoff_hour: self.peak_cutoff_hour,
            peak_rate: self.peak_rate,
            off_peak_rate: self.off_peak_rate,
            overstay_rate: self.overstay_rate,
        };
        policy.validate()?;
        Ok(policy)
    }
}

// ── Tests ──────────────────────────────────────────────────────
