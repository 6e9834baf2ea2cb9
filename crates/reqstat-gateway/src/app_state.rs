//! Shared application state for the reqstat gateway.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::middleware::{filter, RequestMetrics};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<RequestMetrics>,
}

struct AppStateInner {
    cfg: GatewayConfig,
}

impl AppState {
    /// Build state from validated config. Dials statsd once; an unreachable
    /// backend leaves metrics disabled rather than failing startup.
    pub fn new(cfg: GatewayConfig) -> Self {
        let metrics = RequestMetrics::new(&cfg.statsd.address, &cfg.statsd.prefix);
        Self::with_metrics(cfg, metrics)
    }

    /// Build state around an already-constructed middleware, applying the
    /// filter and aggregate settings from config.
    pub fn with_metrics(cfg: GatewayConfig, metrics: RequestMetrics) -> Self {
        let s = &cfg.statsd;
        metrics.set_filter(filter::excluding(s.exclude.clone(), filter::from_mode(s.filter)));
        metrics.set_global_metrics(&s.global.label, s.global.enabled);

        tracing::info!(
            prefix = %s.prefix,
            address = %s.address,
            global = s.global.enabled,
            "request metrics configured"
        );

        Self {
            inner: Arc::new(AppStateInner { cfg }),
            metrics: Arc::new(metrics),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> Arc<RequestMetrics> {
        Arc::clone(&self.metrics)
    }
}
