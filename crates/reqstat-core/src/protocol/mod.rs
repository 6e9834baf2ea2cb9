//! Wire formats.
//!
//! Only the statsd plain-text line protocol is implemented. Encoders are
//! total: every name/value pair produces a line, and transport problems are
//! left to the client that sends it.

pub mod statsd;
