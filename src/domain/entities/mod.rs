//! Core domain entities.
//!
//! - [`ShortLink`] - A long URL and its derived short code

pub mod link;

pub use link::ShortLink;
