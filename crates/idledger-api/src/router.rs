//! Route definitions for the idledger HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    http::HeaderValue,
    middleware as axum_middleware,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use idledger_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(logentry_routes())
        .merge(source_routes())
        .merge(user_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Generation log endpoints: filtered search and single-entry fetch.
fn logentry_routes() -> Router<AppState> {
    Router::new()
        .route("/logentry", get(handlers::logentry::search_log_entries))
        .route("/logentry/{id}", get(handlers::logentry::get_log_entry))
}

/// Identifier source read endpoints.
fn source_routes() -> Router<AppState> {
    Router::new()
        .route("/source", get(handlers::source::list_sources))
        .route("/source/{id}", get(handlers::source::get_source))
}

/// User read endpoints.
fn user_routes() -> Router<AppState> {
    Router::new().route("/user/{id}", get(handlers::user::get_user))
}

/// Health endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}
