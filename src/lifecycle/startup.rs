//! Startup orchestration.
//!
//! # Responsibilities
//! - Log the resolved configuration
//! - Start the metrics exporter when configured
//! - Bind the listener, spawn the poll tasks, then serve
//! - Tear everything down on shutdown
//!
//! # Design Decisions
//! - Fail fast: a bind error is fatal
//! - Poll tasks are spawned before the server accepts its first connection
//! - A server error also stops the poll tasks

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ObservabilityConfig, ServiceConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;
use crate::poller::PollerPool;

/// Fatal error while bringing the service up or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Run the service until SIGINT/SIGTERM.
pub async fn run(
    config: ServiceConfig,
    observability: &ObservabilityConfig,
) -> Result<(), StartupError> {
    config.log_summary();

    if let Some(address) = &observability.metrics_address {
        match address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %address,
                "Failed to parse metrics address"
            ),
        }
    }

    let config = Arc::new(config);
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    let shutdown = Arc::new(Shutdown::new());
    let pollers = PollerPool::from_config(&config).start(&shutdown);

    let signal_task = {
        let shutdown = shutdown.clone();
        tokio::spawn(async move { signals::forward_signals(&shutdown).await })
    };

    let served = HttpServer::new(config)
        .run(listener, shutdown.subscribe())
        .await;

    shutdown.trigger();
    signal_task.abort();
    for handle in pollers {
        let _ = handle.await;
    }

    served.map_err(StartupError::Serve)
}
