//! reqstat core: metric key naming, statsd line encoding, and the shared error type.
//!
//! This crate carries no transport or runtime dependencies. It defines the
//! metric names that existing dashboards depend on and the datagram payloads
//! the gateway's statsd client writes, so both can be tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Naming and encoding
//! are total functions; configuration problems surface as `ReqstatError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod naming;
pub mod protocol;

/// Shared result type.
pub use error::{ErrorCode, ReqstatError, Result};
