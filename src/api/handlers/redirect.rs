//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use super::EMPTY_CODE_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `307 Temporary Redirect` with `Location` set to the long URL and a small
/// HTML body linking to it.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is empty.
/// Returns 404 Not Found with body `not found` on any lookup failure.
/// Returns 500 Internal Server Error if the stored URL cannot be used as a
/// `Location` header value.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if code.is_empty() {
        return Err(AppError::bad_request(EMPTY_CODE_MESSAGE));
    }

    let long_url = state.link_service.resolve(&code).await.map_err(|e| {
        debug!(code = %code, error = %e, "Lookup failed");
        AppError::not_found("not found")
    })?;

    let location = HeaderValue::from_str(&long_url).map_err(|e| {
        error!(code = %code, error = %e, "Stored URL is not a valid Location header");
        AppError::unexpected(e)
    })?;

    let body = format!(
        "<a href=\"{}\">Temporary Redirect</a>.\n",
        html_escape(&long_url)
    );

    Ok((
        StatusCode::TEMPORARY_REDIRECT,
        [
            (header::LOCATION, location),
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            ),
        ],
        body,
    )
        .into_response())
}

/// Escapes the characters that are unsafe inside an HTML attribute.
fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
