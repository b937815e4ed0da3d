//! Domain layer containing business entities and logic.
//!
//! Independent of HTTP and of any particular storage backend.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - The [`repositories::Store`] trait and its error type
//! - [`short_code`] - Short code derivation from a long URL

pub mod entities;
pub mod repositories;
pub mod short_code;
