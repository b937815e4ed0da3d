//! Repository trait definitions for the domain layer.
//!
//! The [`Store`] trait abstracts where short code mappings live. Concrete
//! implementations are in `crate::infrastructure::persistence`.
//!
//! # Testing
//!
//! A `mockall` mock of [`Store`] is generated for unit tests; see
//! `tests/store_*.rs` for behavior tests against the real backends.

pub mod store;

pub use store::{Store, StoreError};

#[cfg(test)]
pub use store::MockStore;
