//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read & parse variables)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared via Arc with the poller pool and the HTTP handlers
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never changes afterwards
//! - Every variable has a default so an empty environment is a valid config
//! - Validation separates syntactic (parse) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig};
