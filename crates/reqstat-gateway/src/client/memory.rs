//! In-memory statter.

use std::time::Duration;

use dashmap::DashMap;

use super::Statter;

/// Records every sample by metric name.
#[derive(Debug, Default)]
pub struct MemoryStatter {
    timings: DashMap<String, Vec<Duration>>,
    counters: DashMap<String, Vec<i64>>,
}

impl MemoryStatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timing samples recorded under `name`.
    pub fn timings(&self, name: &str) -> Vec<Duration> {
        self.timings.get(name).map(|v| v.clone()).unwrap_or_default()
    }

    /// Counter increments recorded under `name`.
    pub fn counters(&self, name: &str) -> Vec<i64> {
        self.counters.get(name).map(|v| v.clone()).unwrap_or_default()
    }

    /// Sum of counter increments under `name`.
    pub fn count(&self, name: &str) -> i64 {
        self.counters(name).iter().sum()
    }

    /// Every metric name that received at least one sample, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .timings
            .iter()
            .map(|e| e.key().clone())
            .chain(self.counters.iter().map(|e| e.key().clone()))
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Total number of samples of both kinds.
    pub fn len(&self) -> usize {
        let t: usize = self.timings.iter().map(|e| e.value().len()).sum();
        let c: usize = self.counters.iter().map(|e| e.value().len()).sum();
        t + c
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Statter for MemoryStatter {
    fn timing(&self, _sample_rate: f32, name: &str, value: Duration) {
        self.timings.entry(name.to_string()).or_default().push(value);
    }

    fn counter(&self, _sample_rate: f32, name: &str, value: i64) {
        self.counters.entry(name.to_string()).or_default().push(value);
    }
}
