//! HTTP middleware.
//!
//! `RequestMetrics` times every request and counts every response status,
//! emitting both to statsd after the downstream handler has produced the
//! response. Path filters decide which paths get a per-path timing.

pub mod filter;
pub mod request_metrics;

pub use filter::{FilterMode, PathFilter};
pub use request_metrics::{track_request_metrics, RequestMetrics};
