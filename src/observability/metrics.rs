//! Metrics collection and exposition.
//!
//! # Metrics
//! - `demo_polls_total` (counter): polls by target and outcome
//!   (`responded`, `error`, `timeout`)
//! - `demo_poll_duration_seconds` (histogram): time spent per poll
//!
//! Without an installed exporter the `metrics` macros record into a no-op
//! recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
///
/// Must be called from inside the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one completed poll.
pub fn record_poll(target: &str, outcome: &'static str, started: Instant) {
    metrics::counter!(
        "demo_polls_total",
        "target" => target.to_string(),
        "outcome" => outcome
    )
    .increment(1);

    metrics::histogram!(
        "demo_poll_duration_seconds",
        "target" => target.to_string()
    )
    .record(started.elapsed().as_secs_f64());
}
