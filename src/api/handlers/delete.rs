//! Handler for link deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::warn;

use super::EMPTY_CODE_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// # Response
///
/// `200 OK` with body `deleted`.
///
/// # Errors
///
/// Returns 400 Bad Request if the code is empty.
/// Returns 500 Internal Server Error with an `unexpected error: ...` text body
/// if the store fails, including when the code does not exist.
pub async fn delete_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<(StatusCode, &'static str), AppError> {
    if code.is_empty() {
        return Err(AppError::bad_request(EMPTY_CODE_MESSAGE));
    }

    state.link_service.delete(&code).await.map_err(|e| {
        warn!(code = %code, error = %e, "Failed to delete short link");
        AppError::unexpected(e)
    })?;

    Ok((StatusCode::OK, "deleted"))
}
