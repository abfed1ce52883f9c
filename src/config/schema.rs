//! Configuration schema definitions.
//!
//! Every value here is resolved once from the process environment at startup
//! and then shared read-only (via `Arc`) by the poller pool and the HTTP
//! handlers.

use serde::Serialize;

/// Service name used when `SERVICE_NAME` is unset.
pub const DEFAULT_SERVICE_NAME: &str = "unknown";

/// Poll interval in seconds for targets without a positional interval.
pub const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Port the status endpoint listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Root configuration for the service.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Identifier reported by the status endpoint and attached to log lines.
    pub service_name: String,

    /// `host:port` addresses to poll, in configured order.
    ///
    /// Entries may be empty strings; the poller pool skips them but keeps
    /// their position for interval pairing.
    pub targets: Vec<String>,

    /// Poll intervals in seconds, paired with `targets` by position.
    pub intervals: Vec<u64>,

    /// Listener configuration.
    pub listener: ListenerConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            targets: Vec::new(),
            intervals: vec![DEFAULT_INTERVAL_SECS],
            listener: ListenerConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl ListenerConfig {
    /// Listen on all interfaces at `port`.
    pub fn on_port(port: u16) -> Self {
        Self {
            bind_address: format!("0.0.0.0:{}", port),
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self::on_port(DEFAULT_PORT)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
///
/// Loaded separately from [`ServiceConfig`] because logging must be up before
/// the service configuration can report its own errors.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Log output format.
    pub log_format: LogFormat,

    /// Prometheus exporter bind address. Metrics are not exported when unset.
    pub metrics_address: Option<String>,
}
