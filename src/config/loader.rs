//! Configuration loading and layering.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → optional TOML file (--config)
//!     → environment variables (always win)
//!     → validation.rs (semantic checks)
//!     → WatchdogConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Environment takes precedence over the file, so env-only deployments
//!   need no file at all
//! - Unparsable numeric values are fatal, never silently defaulted
//! - Env application is driven by an iterator of pairs so tests need not
//!   mutate process-global environment state

use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use super::schema::WatchdogConfig;
use super::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for the schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// An environment variable holds a value of the wrong shape.
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },

    /// Semantic validation failed.
    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Load, layer, and validate the daemon configuration.
pub fn load_config(file: Option<&Path>) -> Result<WatchdogConfig, ConfigError> {
    let mut config = match file {
        Some(path) => parse_file(path)?,
        None => WatchdogConfig::default(),
    };

    apply_env(&mut config, std::env::vars())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_file(path: &Path) -> Result<WatchdogConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Overlay recognized environment variables onto `config`.
pub fn apply_env(
    config: &mut WatchdogConfig,
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<(), ConfigError> {
    for (key, value) in vars {
        match key.as_str() {
            "PING_TARGETS" => config.targets = split_targets(&value),
            "CHECK_INTERVAL_SECONDS" => config.check_interval_secs = parse_var(&key, &value)?,
            "FAILURE_THRESHOLD" => config.failure_threshold = parse_var(&key, &value)?,
            "COOLDOWN_SECONDS" => config.cooldown_secs = parse_var(&key, &value)?,
            "PING_TIMEOUT_SECONDS" => config.probe_timeout_secs = parse_var(&key, &value)?,
            "LOG_FORMAT" => config.observability.log_format = value,
            _ => {}
        }
    }
    Ok(())
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn split_targets(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
