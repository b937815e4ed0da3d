//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /add`      - Shorten a URL
//! - `GET    /{code}`   - Short link redirect
//! - `DELETE /{code}`   - Delete a short link
//! - `GET    /health`   - Health check
//!
//! `/health` is matched before `/{code}`; generated codes are hex and never
//! collide with it.
//!
//! # Middleware
//!
//! - **Timeout** - Requests exceeding the configured duration get 408
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on the time spent serving one request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::link_routes())
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
