//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Start metrics → Spawn pollers → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Broadcast → Server drains, pollers exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: config and bind errors are fatal
//! - Pollers are spawned before the listener accepts traffic

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{run, StartupError};
