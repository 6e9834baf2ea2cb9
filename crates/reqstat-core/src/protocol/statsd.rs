//! Statsd line encoding.
//!
//! Lines follow `<name>:<value>|<type>[|@<rate>]`. The sample rate suffix is
//! omitted at 1.0, which is the only rate the middleware uses.

use std::time::Duration;

/// Report every event.
pub const FULL_SAMPLE_RATE: f32 = 1.0;

/// Metric type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Counter,
    Timing,
}

impl Kind {
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Counter => "c",
            Kind::Timing => "ms",
        }
    }
}

/// Encode a timing sample. Durations are truncated to whole milliseconds.
pub fn timing_line(name: &str, value: Duration, sample_rate: f32) -> String {
    encode(name, &value.as_millis().to_string(), Kind::Timing, sample_rate)
}

/// Encode a counter increment.
pub fn counter_line(name: &str, value: i64, sample_rate: f32) -> String {
    encode(name, &value.to_string(), Kind::Counter, sample_rate)
}

fn encode(name: &str, value: &str, kind: Kind, sample_rate: f32) -> String {
    let mut line = format!("{name}:{value}|{}", kind.tag());
    if sample_rate < FULL_SAMPLE_RATE {
        line.push_str(&format!("|@{sample_rate}"));
    }
    line
}
