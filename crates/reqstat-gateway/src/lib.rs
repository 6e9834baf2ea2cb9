//! reqstat gateway library entry.
//!
//! Statsd clients, path filters, and the request metrics middleware, plus the
//! config/router wiring used by the demo binary (`main.rs`) and integration
//! tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod app_state;
pub mod client;
pub mod config;
pub mod middleware;
pub mod ops;
pub mod router;

pub use middleware::{track_request_metrics, RequestMetrics};
