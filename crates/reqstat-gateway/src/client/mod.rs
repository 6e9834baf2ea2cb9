//! Statsd emission capability.
//!
//! The middleware only talks to `dyn Statter`. Three implementations exist:
//! - `UdpStatter`: one datagram per call, fire-and-forget.
//! - `NopStatter`: used when the backend could not be dialed.
//! - `MemoryStatter`: records calls in memory for tests and local debugging.

pub mod memory;
pub mod nop;
pub mod udp;

use std::sync::Arc;
use std::time::Duration;

pub use memory::MemoryStatter;
pub use nop::NopStatter;
pub use udp::UdpStatter;

/// A sink for statsd samples. Calls never fail and never block on the backend.
pub trait Statter: Send + Sync {
    fn timing(&self, sample_rate: f32, name: &str, value: Duration);
    fn counter(&self, sample_rate: f32, name: &str, value: i64);
}

/// Dial the backend, degrading to a no-op client when that fails.
pub fn dial(address: &str) -> Arc<dyn Statter> {
    match UdpStatter::connect(address) {
        Ok(c) => {
            tracing::debug!(%address, "statsd client connected");
            Arc::new(c)
        }
        Err(e) => {
            tracing::warn!(%address, error = %e, "no statsd server, metrics disabled");
            Arc::new(NopStatter)
        }
    }
}
