//! # SHA Shortener
//!
//! A small URL shortening service built with Axum.
//!
//! A long URL is shortened to the first ten hex characters of its SHA-1
//! digest. Mappings are kept either in process memory or in a single JSON
//! document on disk.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Short code derivation and the [`domain::repositories::Store`] trait
//! - **Application Layer** ([`application`]) - Link service used by handlers and the admin CLI
//! - **Infrastructure Layer** ([`infrastructure`]) - Memory and file store implementations
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## HTTP API
//!
//! | Method   | Path       | Success                     |
//! |----------|------------|-----------------------------|
//! | `POST`   | `/add`     | 201 `{shortened_url, long_url}` |
//! | `GET`    | `/{code}`  | 307 redirect                |
//! | `DELETE` | `/{code}`  | 200 `deleted`               |
//! | `GET`    | `/health`  | 200 status JSON             |
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORT_DOMAIN="http://localhost:8080"
//! cargo run
//!
//! curl -X POST localhost:8080/add -d '{"url":"http://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ShortenedLink};
    pub use crate::domain::entities::ShortLink;
    pub use crate::domain::repositories::{Store, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{FileStore, MemoryStore};
    pub use crate::state::AppState;
}
