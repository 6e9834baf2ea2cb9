//! Operational and demo HTTP endpoints.
//!
//! - `/healthz`            : liveness
//! - `/v1/echo/*rest`      : echoes the path tail
//! - `/v1/status/:code`    : answers with the given status code
//! - `/v1/metrics/config`  : statsd backend and live metric names

use std::fmt::Write;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn echo(Path(rest): Path<String>) -> impl IntoResponse {
    (StatusCode::OK, rest)
}

pub async fn status(Path(code): Path<u16>) -> impl IntoResponse {
    match StatusCode::from_u16(code) {
        Ok(s) if !s.is_informational() => {
            (s, s.canonical_reason().unwrap_or_default().to_string())
        }
        _ => (StatusCode::BAD_REQUEST, format!("invalid status code: {code}")),
    }
}

pub async fn metrics_config(State(state): State<AppState>) -> impl IntoResponse {
    let statsd = &state.cfg().statsd;
    let metrics = state.metrics();
    let names = metrics.global_names();

    let mut out = String::new();
    let _ = writeln!(out, "address {}", statsd.address);
    let _ = writeln!(out, "prefix {}", metrics.prefix());
    let _ = writeln!(out, "global {}", metrics.is_global());
    let _ = writeln!(out, "global_timing {}", names.timing);
    let _ = writeln!(out, "global_count {}", names.count);
    for p in &statsd.exclude {
        let _ = writeln!(out, "exclude {p}");
    }
    (StatusCode::OK, out)
}
