//! Configuration loading from the process environment.
//!
//! Variables are read through a lookup function so the parsing rules can be
//! exercised without touching the real environment.

use std::num::ParseIntError;

use thiserror::Error;

use crate::config::schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig, DEFAULT_INTERVAL_SECS,
    DEFAULT_PORT, DEFAULT_SERVICE_NAME,
};
use crate::config::validation::{validate_config, ValidationError};

pub const SERVICE_NAME_VAR: &str = "SERVICE_NAME";
pub const TARGETS_VAR: &str = "TARGETS";
pub const INTERVALS_VAR: &str = "INTERVALS";
pub const PORT_VAR: &str = "PORT";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";
pub const METRICS_ADDRESS_VAR: &str = "METRICS_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {key}='{value}': {source}")]
    Parse {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ServiceConfig {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load and validate configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_name =
            lookup(SERVICE_NAME_VAR).unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        let targets = lookup(TARGETS_VAR)
            .map(|raw| parse_targets(&raw))
            .unwrap_or_default();

        let intervals = match lookup(INTERVALS_VAR) {
            Some(raw) => parse_intervals(&raw)?,
            None => vec![DEFAULT_INTERVAL_SECS],
        };

        let port = match lookup(PORT_VAR).filter(|v| !v.is_empty()) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|source| ConfigError::Parse {
                key: PORT_VAR,
                value: raw.clone(),
                source,
            })?,
            None => DEFAULT_PORT,
        };

        let config = Self {
            service_name,
            targets,
            intervals,
            listener: ListenerConfig::on_port(port),
        };

        validate_config(&config).map_err(ConfigError::Validation)?;

        Ok(config)
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        tracing::info!(service = %self.service_name, "Starting {}", self.service_name);
        tracing::info!(service = %self.service_name, "Targets: {:?}", self.targets);
        tracing::info!(service = %self.service_name, "Intervals: {:?}", self.intervals);
        tracing::info!(
            service = %self.service_name,
            bind_address = %self.listener.bind_address,
            "Configuration loaded"
        );
    }
}

impl ObservabilityConfig {
    /// Load observability settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load observability settings. Never fails; unknown formats fall back to pretty.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let metrics_address = lookup(METRICS_ADDRESS_VAR).filter(|v| !v.is_empty());

        Self {
            log_format,
            metrics_address,
        }
    }
}

/// Split a comma-separated target list.
///
/// An empty value means "no targets". Empty entries inside a non-empty value
/// are kept so that positional interval pairing still lines up.
pub fn parse_targets(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

/// Parse a comma-separated list of interval seconds.
///
/// Surrounding whitespace on an entry is ignored; anything else that is not a
/// non-negative integer (including an empty entry) is an error.
pub fn parse_intervals(raw: &str) -> Result<Vec<u64>, ConfigError> {
    raw.split(',')
        .map(|entry| {
            entry
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::Parse {
                    key: INTERVALS_VAR,
                    value: entry.to_string(),
                    source,
                })
        })
        .collect()
}
