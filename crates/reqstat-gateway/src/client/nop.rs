use std::time::Duration;

use super::Statter;

/// Accepts every sample and drops it.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopStatter;

impl Statter for NopStatter {
    fn timing(&self, _sample_rate: f32, _name: &str, _value: Duration) {}
    fn counter(&self, _sample_rate: f32, _name: &str, _value: i64) {}
}
