//! Link route configuration.

use crate::api::handlers::{add_handler, delete_handler, missing_code_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    extract::{Path, State},
    routing::{get, post},
};

/// `add` is also a valid short code for lookups and deletes.
const ADD_CODE: &str = "add";

/// Routes for creating, resolving and deleting short links.
///
/// # Endpoints
///
/// - `POST   /add`     - Shorten a URL
/// - `GET    /add`     - Redirect for the code `add`
/// - `DELETE /add`     - Delete the code `add`
/// - `GET    /{code}`  - Redirect to the long URL
/// - `DELETE /{code}`  - Delete a short link
/// - `GET    /`        - Rejected, empty code
/// - `DELETE /`        - Rejected, empty code
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/add",
            post(add_handler)
                .get(|state: State<AppState>| {
                    redirect_handler(Path(ADD_CODE.to_string()), state)
                })
                .delete(|state: State<AppState>| {
                    delete_handler(Path(ADD_CODE.to_string()), state)
                }),
        )
        .route("/{code}", get(redirect_handler).delete(delete_handler))
        .route("/", get(missing_code_handler).delete(missing_code_handler))
}
