//! Request timing and status counting.
//!
//! Per request, after the downstream handler returns:
//! - timing task: `{prefix}{path}` (if the filter records it) and, when global
//!   metrics are on, `{prefix}.{label}.timing`
//! - counter task: `{prefix}.request.{status}` and, when global metrics are
//!   on, `{prefix}.{label}.count`
//!
//! Both tasks are detached. The response goes back to the host without waiting
//! for them, and nothing they do can fail the request.
//!
//! Settings live in an immutable snapshot swapped under a lock, so setters can
//! run while traffic is being served and readers never see half an update.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use reqstat_core::naming::{self, GlobalNames};
use reqstat_core::protocol::statsd::FULL_SAMPLE_RATE;

use crate::client::{self, Statter};
use crate::middleware::filter::{self, PathFilter};

#[derive(Clone)]
struct Settings {
    filter: PathFilter,
    global: bool,
    names: GlobalNames,
}

pub struct RequestMetrics {
    prefix: Arc<str>,
    client: Arc<dyn Statter>,
    settings: RwLock<Arc<Settings>>,
}

impl RequestMetrics {
    /// Dial the statsd backend at `address`. If that fails the middleware
    /// still works, with metrics silently disabled.
    pub fn new(address: &str, prefix: &str) -> Self {
        Self::with_statter(prefix, client::dial(address))
    }

    /// Build around an existing client.
    pub fn with_statter(prefix: &str, client: Arc<dyn Statter>) -> Self {
        let settings = Settings {
            filter: Arc::new(filter::strip_query),
            global: true,
            names: GlobalNames::default_for(prefix),
        };
        Self {
            prefix: Arc::from(prefix),
            client,
            settings: RwLock::new(Arc::new(settings)),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_global(&self) -> bool {
        self.snapshot().global
    }

    /// Current aggregate metric names.
    pub fn global_names(&self) -> GlobalNames {
        self.snapshot().names.clone()
    }

    /// Replace the path filter for requests completing after this call.
    pub fn set_filter(&self, filter: PathFilter) {
        self.update(|s| Settings {
            filter,
            ..s.clone()
        });
    }

    /// Rename the aggregate metrics to `{prefix}.{label}.timing|count` and
    /// turn them on or off.
    pub fn set_global_metrics(&self, label: &str, enabled: bool) {
        let names = GlobalNames::new(&self.prefix, label);
        self.update(|s| Settings {
            global: enabled,
            names,
            ..s.clone()
        });
    }

    /// Run `next`, then schedule emission for the finished request.
    pub async fn handle(&self, request: Request, next: Next) -> Response {
        let target = request
            .uri()
            .path_and_query()
            .map_or_else(|| request.uri().path(), |pq| pq.as_str())
            .to_string();
        let start = Instant::now();

        let response = next.run(request).await;

        self.emit(target, start.elapsed(), response.status().as_u16());
        response
    }

    fn emit(&self, target: String, elapsed: Duration, status: u16) {
        let settings = self.snapshot();

        {
            let client = Arc::clone(&self.client);
            let prefix = Arc::clone(&self.prefix);
            let settings = Arc::clone(&settings);
            tokio::spawn(async move {
                time_request(client.as_ref(), &prefix, &settings, &target, elapsed);
            });
        }

        let client = Arc::clone(&self.client);
        let prefix = Arc::clone(&self.prefix);
        tokio::spawn(async move {
            count_response(client.as_ref(), &prefix, &settings, status);
        });
    }

    fn snapshot(&self) -> Arc<Settings> {
        let guard = self.settings.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn update(&self, f: impl FnOnce(&Settings) -> Settings) {
        let mut guard = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        let next = f(&guard);
        *guard = Arc::new(next);
    }
}

fn time_request(
    client: &dyn Statter,
    prefix: &str,
    settings: &Settings,
    target: &str,
    elapsed: Duration,
) {
    if let Some(path) = (settings.filter)(target) {
        client.timing(FULL_SAMPLE_RATE, &naming::per_path_name(prefix, &path), elapsed);
    }
    if settings.global {
        client.timing(FULL_SAMPLE_RATE, &settings.names.timing, elapsed);
    }
}

fn count_response(client: &dyn Statter, prefix: &str, settings: &Settings, status: u16) {
    client.counter(FULL_SAMPLE_RATE, &naming::status_counter_name(prefix, status), 1);
    if settings.global {
        client.counter(FULL_SAMPLE_RATE, &settings.names.count, 1);
    }
}

/// Axum middleware entry point.
///
/// ```ignore
/// let metrics = Arc::new(RequestMetrics::new("127.0.0.1:8125", "svc"));
/// Router::new()
///     .route("/orders/:id", get(handler))
///     .layer(axum::middleware::from_fn_with_state(metrics, track_request_metrics))
/// ```
pub async fn track_request_metrics(
    State(metrics): State<Arc<RequestMetrics>>,
    request: Request,
    next: Next,
) -> Response {
    metrics.handle(request, next).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryStatter;

    fn metrics() -> (Arc<MemoryStatter>, RequestMetrics) {
        let mem = Arc::new(MemoryStatter::new());
        let m = RequestMetrics::with_statter("svc", mem.clone());
        (mem, m)
    }

    #[test]
    fn defaults() {
        let (_, m) = metrics();
        assert_eq!(m.prefix(), "svc");
        assert!(m.is_global());
        assert_eq!(m.global_names(), GlobalNames::new("svc", "request"));
    }

    #[test]
    fn set_global_metrics_recomputes_both_names() {
        let (_, m) = metrics();
        m.set_global_metrics("api", false);
        assert!(!m.is_global());
        let names = m.global_names();
        assert_eq!(names.timing, "svc.api.timing");
        assert_eq!(names.count, "svc.api.count");
    }

    #[test]
    fn set_filter_keeps_global_settings() {
        let (_, m) = metrics();
        m.set_global_metrics("api", true);
        m.set_filter(Arc::new(|_: &str| None));
        assert!(m.is_global());
        assert_eq!(m.global_names().count, "svc.api.count");
    }

    #[test]
    fn timing_and_count_helpers() {
        let (mem, m) = metrics();
        let s = m.snapshot();
        time_request(mem.as_ref(), "svc", &s, "/orders/42?x=1", Duration::from_millis(15));
        count_response(mem.as_ref(), "svc", &s, 200);

        assert_eq!(mem.timings("svc.orders.42"), vec![Duration::from_millis(15)]);
        assert_eq!(mem.timings("svc.request.timing"), vec![Duration::from_millis(15)]);
        assert_eq!(mem.counters("svc.request.200"), vec![1]);
        assert_eq!(mem.counters("svc.request.count"), vec![1]);
        assert_eq!(mem.len(), 4);
    }

    #[test]
    fn empty_normalized_path() {
        let (mem, m) = metrics();
        m.set_filter(Arc::new(|_: &str| Some(String::new())));
        time_request(mem.as_ref(), "svc", &m.snapshot(), "/anything", Duration::ZERO);
        assert_eq!(mem.timings("svc.").len(), 1);
    }
}
