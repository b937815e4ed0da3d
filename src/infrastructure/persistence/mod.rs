//! Store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::Store`].
//!
//! # Stores
//!
//! - [`MemoryStore`] - Process-local map, lost on restart
//! - [`FileStore`] - JSON document on disk, rewritten on every mutation

pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
