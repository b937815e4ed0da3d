//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod add;
pub mod delete;
pub mod health;
pub mod missing_code;
pub mod redirect;

pub use add::add_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use missing_code::missing_code_handler;
pub use redirect::redirect_handler;

/// Body of the 400 response for an empty short code.
pub const EMPTY_CODE_MESSAGE: &str = "shortened URL is empty";
