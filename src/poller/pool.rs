//! Poller pool: one independent task per configured target.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::config::schema::{ServiceConfig, DEFAULT_INTERVAL_SECS};
use crate::lifecycle::Shutdown;
use crate::poller::task::{build_client, PollClient, PollTask};

/// The set of poll tasks derived from one configuration snapshot.
pub struct PollerPool {
    service_name: String,
    tasks: Vec<PollTask>,
    client: PollClient,
}

impl PollerPool {
    /// Plan one task per non-empty target in `config`.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            service_name: config.service_name.clone(),
            tasks: plan_tasks(&config.targets, &config.intervals),
            client: build_client(),
        }
    }

    /// Planned tasks, in target order.
    pub fn tasks(&self) -> &[PollTask] {
        &self.tasks
    }

    /// Spawn every task onto the runtime.
    ///
    /// Tasks run until `shutdown` is triggered or dropped. The returned
    /// handles are only needed by callers that want to await that exit.
    pub fn start(self, shutdown: &Shutdown) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::with_capacity(self.tasks.len());

        for task in self.tasks {
            let span = tracing::info_span!(
                "poller",
                service = %self.service_name,
                target = %task.target
            );

            tracing::info!(
                service = %self.service_name,
                target = %task.target,
                interval_secs = task.interval.as_secs(),
                "Started periodic calls to {} every {}s",
                task.target,
                task.interval.as_secs()
            );

            let client = self.client.clone();
            let shutdown_rx = shutdown.subscribe();
            handles.push(tokio::spawn(
                task.run(client, shutdown_rx).instrument(span),
            ));
        }

        handles
    }
}

/// Pair targets with intervals by position.
///
/// Empty targets are skipped without shifting the pairing: the target at
/// position `i` always takes `intervals[i]`, or the 60 second default when
/// the interval list is shorter than the target list.
pub fn plan_tasks(targets: &[String], intervals: &[u64]) -> Vec<PollTask> {
    targets
        .iter()
        .enumerate()
        .filter(|(_, target)| !target.is_empty())
        .map(|(i, target)| {
            let secs = intervals.get(i).copied().unwrap_or(DEFAULT_INTERVAL_SECS);
            PollTask::new(i, target.clone(), Duration::from_secs(secs))
        })
        .collect()
}
