//! Handler for requests that carry no short code.

use super::EMPTY_CODE_MESSAGE;
use crate::error::AppError;

/// Rejects `GET /` and `DELETE /`.
///
/// # Errors
///
/// Always returns 400 Bad Request.
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request(EMPTY_CODE_MESSAGE)
}
