//! A single poll task.
//!
//! # Responsibilities
//! - Issue one GET to `http://<target>` per tick
//! - Log the status code, or the transport failure
//! - Sleep the task's interval and repeat until shutdown
//!
//! # Design Decisions
//! - Any HTTP status is a completed poll; only transport failures are errors
//! - Failures are logged and forgotten: no counters, no backoff, no retry
//! - Each outbound call has its own 5 second deadline; the loop has none

use std::error::Error as StdError;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time;

use crate::observability::metrics;

/// Deadline for a single outbound poll.
pub const POLL_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client shared by every poll task.
pub type PollClient = Client<HttpConnector, Body>;

/// Build the client used for outbound polls.
pub fn build_client() -> PollClient {
    Client::builder(TokioExecutor::new()).build(HttpConnector::new())
}

/// Transport-level failure while contacting a target.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("invalid target URI '{uri}': {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: axum::http::Error,
    },

    #[error("request failed: {}", error_chain(.0))]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

/// Render an error and its sources as "outer: inner: root".
fn error_chain(err: &dyn StdError) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Result of one tick.
#[derive(Debug)]
pub enum PollOutcome {
    /// The target answered; the status may be anything, 5xx included.
    Responded(StatusCode),
    /// The target could not be reached.
    Failed(PollError),
}

impl PollOutcome {
    /// Status code, if the target answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PollOutcome::Responded(status) => Some(*status),
            PollOutcome::Failed(_) => None,
        }
    }

    /// Metric label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            PollOutcome::Responded(_) => "responded",
            PollOutcome::Failed(PollError::Timeout(_)) => "timeout",
            PollOutcome::Failed(_) => "error",
        }
    }
}

/// One target paired with its resolved interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTask {
    /// Position of the target in the configured list.
    pub index: usize,
    /// `host:port` to poll.
    pub target: String,
    /// Time slept between ticks.
    pub interval: Duration,
}

impl PollTask {
    pub fn new(index: usize, target: impl Into<String>, interval: Duration) -> Self {
        Self {
            index,
            target: target.into(),
            interval,
        }
    }

    /// URL requested on every tick.
    pub fn url(&self) -> String {
        format!("http://{}", self.target)
    }

    /// Poll the target once with the standard deadline.
    pub async fn poll_once(&self, client: &PollClient) -> PollOutcome {
        self.poll_with_timeout(client, POLL_TIMEOUT).await
    }

    /// Poll the target once, giving up after `timeout`.
    pub async fn poll_with_timeout(&self, client: &PollClient, timeout: Duration) -> PollOutcome {
        let started = Instant::now();
        let outcome = match self.request(client, timeout).await {
            Ok(status) => {
                tracing::info!(
                    status = status.as_u16(),
                    "Response from {}: {}",
                    self.target,
                    status.as_u16()
                );
                PollOutcome::Responded(status)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error calling {}: {}", self.target, e);
                PollOutcome::Failed(e)
            }
        };

        metrics::record_poll(&self.target, outcome.label(), started);
        outcome
    }

    async fn request(&self, client: &PollClient, timeout: Duration) -> Result<StatusCode, PollError> {
        let uri = self.url();
        let request = Request::builder()
            .method("GET")
            .uri(uri.as_str())
            .body(Body::empty())
            .map_err(|source| PollError::InvalidUri { uri, source })?;

        tracing::info!("Calling {}...", self.target);

        match time::timeout(timeout, client.request(request)).await {
            Ok(Ok(response)) => Ok(response.status()),
            Ok(Err(e)) => Err(PollError::Transport(e)),
            Err(_) => Err(PollError::Timeout(timeout)),
        }
    }

    /// Run the poll loop until the shutdown signal fires.
    ///
    /// Also returns if the shutdown coordinator is dropped.
    pub async fn run(self, client: PollClient, mut shutdown: broadcast::Receiver<()>) {
        loop {
            tokio::select! {
                _ = self.tick(&client) => {}
                _ = shutdown.recv() => {
                    tracing::info!("Poll task received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    async fn tick(&self, client: &PollClient) {
        self.poll_once(client).await;
        time::sleep(self.interval).await;
    }
}
