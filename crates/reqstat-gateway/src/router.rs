//! Axum router wiring.
//!
//! Every route sits behind the request metrics middleware.

use axum::{middleware, routing::get, Router};

use crate::{app_state::AppState, middleware::track_request_metrics, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/v1/echo/*rest", get(ops::echo))
        .route("/v1/status/:code", get(ops::status))
        .route("/v1/metrics/config", get(ops::metrics_config))
        .layer(middleware::from_fn_with_state(state.metrics(), track_request_metrics))
        .with_state(state)
}
