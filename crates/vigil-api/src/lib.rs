//! vigil-api — the HTTP front-end.
//!
//! Two routes:
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/health` | Process liveness; always "healthy" |
//! | GET | `/metrics` | Prometheus exposition of the registry |
//!
//! `/health` reports that the prober process itself is alive; it is
//! independent of the state of any configured check.

pub mod handlers;

use axum::Router;
use axum::routing::get;
use vigil_registry::MetricRegistry;

/// Shared state for the handlers.
#[derive(Clone)]
pub struct ApiState {
    pub registry: MetricRegistry,
}

/// Build the front-end router.
pub fn build_router(registry: MetricRegistry) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .with_state(ApiState { registry })
}
