//! Front-end handlers.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use tracing::debug;

use vigil_registry::render_prometheus;

use crate::ApiState;

/// GET /health
///
/// Liveness only: a fixed response regardless of probe state.
pub async fn health() -> &'static str {
    "healthy"
}

/// GET /metrics
///
/// Prometheus text exposition of the current registry snapshot.
pub async fn metrics(State(state): State<ApiState>) -> impl IntoResponse {
    let entries = state.registry.read_all().await;
    debug!(series = entries.len(), "serving metrics");
    let body = render_prometheus(&entries);
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}
