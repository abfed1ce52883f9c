//! Demo caller library.
//!
//! A status endpoint plus a pool of background tasks that periodically GET a
//! configured set of targets and log what they see.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod poller;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use poller::PollerPool;
