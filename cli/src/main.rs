//! Zone billing — CLI
//!
//! Replays a JSON scenario of recorded crossings through the event log,
//! runs one billing pass against the scenario's accounts and prints the
//! report as JSON on stdout. Logs go to stderr.
//!
//! ```sh
//! # Default config (~/.config/zone-billing/config.toml)
//! zone-billing scenario.json
//!
//! # Custom config path, verbose logs
//! zone-billing --config ./config.toml --log-level debug scenario.json
//!
//! # Validate config without billing
//! zone-billing --check
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use zone_billing::config::{AppConfig, LoggingConfig};
use zone_billing::infrastructure::OperationsTeam;
use zone_billing::scenario::Scenario;
use zone_billing::support::telemetry::init_tracing;
use zone_billing::{AppError, BillingService, ConfigError};

/// Zone billing — turn recorded boundary crossings into charges.
#[derive(Parser, Debug)]
#[command(
    name = "zone-billing",
    version,
    about = "Replay zone crossings and run a billing pass",
    long_about = "Replays a JSON scenario of zone entries and exits, computes each \
                  vehicle's charge under the free-return-window policy and settles it \
                  against the scenario's accounts.\n\n\
                  Default config: ~/.config/zone-billing/config.toml"
)]
struct Cli {
    /// Scenario file (JSON) with `accounts` and `crossings`.
    #[arg(required_unless_present = "check")]
    scenario: Option<PathBuf>,

    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "ZONE_BILLING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit.
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(zone_billing::default_config_path);
    let loaded = AppConfig::load(&config_path);

    // Tracing comes up before anything is reported, even for a bad config.
    init_tracing(&logging_for(&cli, loaded.as_ref().ok()));

    match run(&cli, &config_path, loaded) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logging settings from the config file (or defaults), with CLI overrides applied.
fn logging_for(cli: &Cli, config: Option<&AppConfig>) -> LoggingConfig {
    let mut logging = config.map(|c| c.logging.clone()).unwrap_or_default();
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    logging
}

/// Validate the config or bill the scenario, returning what to print.
///
/// A config that failed to load or validate is an error in both modes;
/// billing never falls back to default rates.
fn run(
    cli: &Cli,
    config_path: &Path,
    loaded: Result<AppConfig, ConfigError>,
) -> Result<String, AppError> {
    let config = loaded?;
    info!("Configuration loaded from {}", config_path.display());

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        let c = &config.charging;
        let summary = [
            "Configuration is valid".to_string(),
            format!("   Config file     : {}", config_path.display()),
            format!("   Log level       : {}", config.logging.level),
            format!("   Free window     : {}h", c.free_window_hours),
            format!("   Peak cutoff     : {:02}:00", c.peak_cutoff_hour),
            format!(
                "   Rates           : peak {} / off-peak {} / overstay {}",
                c.peak_rate, c.off_peak_rate, c.overstay_rate
            ),
        ];
        return Ok(summary.join("\n"));
    }

    let path = cli
        .scenario
        .as_deref()
        .ok_or_else(|| AppError::Scenario("no scenario file given".to_string()))?;

    let policy = config.charging.to_policy()?;
    let scenario = Scenario::load(path)?;
    info!(
        scenario = %path.display(),
        accounts = scenario.accounts.len(),
        crossings = scenario.crossings.len(),
        "Scenario loaded"
    );

    let log = scenario.replay();
    let accounts = scenario.accounts();
    let operations = OperationsTeam::new();

    let report = BillingService::new(policy).run(&log, &accounts, &operations);

    Ok(serde_json::to_string_pretty(&report)?)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use zone_billing::DomainError;

    const SCENARIO: &str = r#"{
        "accounts": [
            { "owner": "Jane", "registration": "A123 XYZ", "balance": "20.00" }
        ],
        "crossings": [
            { "kind": "entry", "registration": "A123 XYZ", "timestamp": "2018-01-01T09:00:00" },
            { "kind": "exit",  "registration": "A123 XYZ", "timestamp": "2018-01-01T10:00:00" }
        ]
    }"#;

    fn scenario_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "zone-billing-cli-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, SCENARIO).unwrap();
        path
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("zone-billing").chain(args.iter().copied()))
    }

    fn invalid_config() -> Result<AppConfig, ConfigError> {
        AppConfig::from_toml_str("[charging]\npeak_cutoff_hour = 30\n")
    }

    #[test]
    fn invalid_config_does_not_bill() {
        let path = scenario_file("invalid");
        let cli = cli(&[path.to_str().unwrap()]);

        let err = run(&cli, Path::new("bad.toml"), invalid_config()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::Invalid(DomainError::Validation(_)))
        ));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn invalid_config_fails_check() {
        let cli = cli(&["--check"]);
        assert!(run(&cli, Path::new("bad.toml"), invalid_config()).is_err());
    }

    #[test]
    fn valid_config_bills_at_configured_rates() {
        let path = scenario_file("valid");
        let cli = cli(&[path.to_str().unwrap()]);
        let config = AppConfig::from_toml_str("[charging]\npeak_rate = 8\n");

        let output = run(&cli, Path::new("config.toml"), config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["outcomes"][0]["outcome"], "charged");
        assert_eq!(json["outcomes"][0]["amount"], "8");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn check_summarises_config() {
        let cli = cli(&["--check"]);
        let output = run(&cli, Path::new("config.toml"), Ok(AppConfig::default())).unwrap();
        assert!(output.starts_with("Configuration is valid"));
        assert!(output.contains("Peak cutoff     : 14:00"));
    }

    #[test]
    fn log_level_override_applies_with_or_without_config() {
        let quiet = cli(&["--check", "--log-level", "warn"]);
        assert_eq!(logging_for(&quiet, None).level, "warn");
        let configured = AppConfig::default();
        assert_eq!(logging_for(&quiet, Some(&configured)).level, "warn");

        let plain = cli(&["--check"]);
        assert_eq!(logging_for(&plain, None).level, "info");
    }
}
