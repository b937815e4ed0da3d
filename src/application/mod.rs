//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::Store`] trait and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, lookup and deletion

pub mod services;
