//! Periodic poller subsystem.
//!
//! # Data Flow
//! ```text
//! ServiceConfig (targets, intervals)
//!     → pool.rs (positional pairing, skip empty targets)
//!     → one task.rs loop per target:
//!         GET http://<target> (5s deadline)
//!         → log status code or transport error
//!         → sleep interval
//!         → repeat
//! ```
//!
//! # Design Decisions
//! - Tasks share nothing but a cloned HTTP client
//! - Failures never leave the task that saw them
//! - No jitter, backoff, retry caps or circuit breaking

pub mod pool;
pub mod task;

pub use pool::{plan_tasks, PollerPool};
pub use task::{PollError, PollOutcome, PollTask, POLL_TIMEOUT};
