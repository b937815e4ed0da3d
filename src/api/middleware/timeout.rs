//! Request timeout middleware.

use axum::http::StatusCode;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

/// Creates a layer that aborts requests running longer than `timeout`.
///
/// Timed-out requests are answered with `408 Request Timeout`.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
