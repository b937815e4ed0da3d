//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::api::dto::links::{AddUrlRequest, AddUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a long URL.
///
/// # Endpoint
///
/// `POST /add`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com" }
/// ```
///
/// Only the first JSON value in the body is decoded; anything after it is
/// ignored.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortened_url": "http://localhost:8080/89dce6a446",
///   "long_url": "http://example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error with an `unexpected error: ...` text body
/// if the body cannot be decoded or the store rejects the code (including
/// when the URL was already shortened).
pub async fn add_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AddUrlResponse>), AppError> {
    let request: AddUrlRequest = decode_first(&body).map_err(|e| {
        warn!(error = %e, "Failed to decode add request");
        AppError::unexpected(e)
    })?;

    let link = state
        .link_service
        .shorten(request.url)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to store short link");
            AppError::unexpected(e)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(AddUrlResponse {
            shortened_url: link.short_url,
            long_url: link.long_url,
        }),
    ))
}

/// Decodes the first JSON value in `body`, ignoring trailing bytes.
fn decode_first<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .next()
    {
        Some(result) => result,
        // Empty or whitespace-only body: reparse to get a proper EOF error.
        None => serde_json::from_slice(body),
    }
}
