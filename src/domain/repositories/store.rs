//! Store trait for short code to URL mappings.

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by [`Store`] implementations.
///
/// The `Display` text of each variant is what HTTP handlers write into the
/// response body, so the wording is part of the public contract.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `add` was called with a code that is already mapped.
    #[error("shortened URL already exists")]
    AlreadyExists,

    /// `remove` or `get` was called with a code that is not mapped.
    #[error("shortened URL does not exist")]
    NotFound,

    /// The backing file could not be read or written.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but does not hold a valid store document.
    #[error("unable to parse incoming JSON store data. Error: {0}")]
    Corrupted(#[source] serde_json::Error),

    /// The in-memory document could not be serialized back to JSON.
    #[error("unable to generate JSON representation for file")]
    Serialization(#[source] serde_json::Error),
}

/// Persistence capability for short code to URL mappings.
///
/// A single instance is shared by every in-flight request, so implementations
/// carry their own synchronization.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryStore`] - process-local map
/// - [`crate::infrastructure::persistence::FileStore`] - JSON document on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    /// Maps `code` to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if `code` is already mapped; the
    /// existing mapping is left untouched.
    async fn add(&self, code: &str, url: &str) -> Result<(), StoreError>;

    /// Deletes the mapping for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `code` is not mapped.
    async fn remove(&self, code: &str) -> Result<(), StoreError>;

    /// Looks up the URL mapped to `code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if `code` is not mapped.
    async fn get(&self, code: &str) -> Result<String, StoreError>;

    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::AlreadyExists.to_string(),
            "shortened URL already exists"
        );
        assert_eq!(
            StoreError::NotFound.to_string(),
            "shortened URL does not exist"
        );
    }

    #[test]
    fn test_corrupted_message_includes_parse_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = StoreError::Corrupted(parse_err);

        assert!(
            err.to_string()
                .starts_with("unable to parse incoming JSON store data. Error: ")
        );
    }

    #[test]
    fn test_io_error_passes_message_through() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err: StoreError = io.into();

        assert_eq!(err.to_string(), "permission denied");
    }
}
