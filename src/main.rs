//! Demo caller service.
//!
//! # Architecture Overview
//!
//! ```text
//!   environment ──▶ config ──▶ ServiceConfig (Arc, read-only)
//!                                 │                    │
//!                                 ▼                    ▼
//!                          ┌────────────┐      ┌──────────────┐
//!                          │ poller pool│      │ http server  │◀── GET /, /health
//!                          │ 1 task per │      │  (axum)      │
//!                          │   target   │      └──────────────┘
//!                          └─────┬──────┘
//!                                │ GET http://<target> every interval
//!                                ▼
//!                             targets
//! ```

use demo_caller::config::{ObservabilityConfig, ServiceConfig};
use demo_caller::lifecycle;
use demo_caller::observability::logging;

#[tokio::main]
async fn main() {
    let observability = ObservabilityConfig::from_env();
    logging::init_logging(&observability);

    tracing::info!("demo-caller v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match ServiceConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = lifecycle::run(config, &observability).await {
        tracing::error!(error = %e, "Service failed");
        std::process::exit(1);
    }

    tracing::info!("Shutdown complete");
}
