//! HTTP API server for the account service.
//!
//! Exposes CRUD endpoints for accounts over a pluggable [`AccountStore`],
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use account_store::AccountStore;
use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::accounts::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: AccountStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::index::get))
        .route("/health", get(routes::health::check))
        .route(
            "/accounts",
            get(routes::accounts::list::<S>).post(routes::accounts::create::<S>),
        )
        .route(
            "/accounts/{id}",
            get(routes::accounts::get::<S>)
                .put(routes::accounts::update::<S>)
                .delete(routes::accounts::delete::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .fallback(routes::fallback::not_found)
        .method_not_allowed_fallback(routes::fallback::method_not_allowed)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Wraps a store in the shared state the handlers expect.
pub fn create_default_state<S: AccountStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}
