//! Link creation, lookup and deletion service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{Store, StoreError};
use tracing::info;

/// A stored link as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub code: String,
    pub short_url: String,
    pub long_url: String,
}

/// Service for shortening URLs on top of a [`Store`].
///
/// Derives the short code from the long URL and builds the public short URL
/// from the configured domain. A code collision between two distinct URLs is
/// rejected exactly like a repeated URL.
pub struct LinkService {
    store: Arc<dyn Store>,
    domain: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `domain` is the prefix of every short URL, e.g. `http://localhost:8080`.
    pub fn new(store: Arc<dyn Store>, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        Self {
            store,
            domain: domain.trim_end_matches('/').to_string(),
        }
    }

    /// Stores `long_url` under its derived short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the code is already mapped,
    /// whether to the same URL or to a colliding one. Other store errors are
    /// passed through.
    pub async fn shorten(&self, long_url: String) -> Result<ShortenedLink, StoreError> {
        let link = ShortLink::from_long_url(long_url);

        self.store.add(&link.code, &link.long_url).await?;
        info!(code = %link.code, "Created short link");

        Ok(ShortenedLink {
            short_url: link.short_url(&self.domain),
            code: link.code,
            long_url: link.long_url,
        })
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the code is unknown.
    pub async fn resolve(&self, code: &str) -> Result<String, StoreError> {
        self.store.get(code).await
    }

    /// Deletes the mapping for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the code is unknown.
    pub async fn delete(&self, code: &str) -> Result<(), StoreError> {
        self.store.remove(code).await?;
        info!(code, "Deleted short link");
        Ok(())
    }

    /// Domain prefix used for short URLs.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Name of the underlying store backend.
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockStore;

    #[tokio::test]
    async fn test_shorten_success() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_add()
            .withf(|code, url| code == "89dce6a446" && url == "http://example.com")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LinkService::new(Arc::new(mock_store), "http://localhost:8080");

        let link = service
            .shorten("http://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(link.code, "89dce6a446");
        assert_eq!(link.short_url, "http://localhost:8080/89dce6a446");
        assert_eq!(link.long_url, "http://example.com");
    }

    #[tokio::test]
    async fn test_shorten_trims_domain_slash() {
        let mut mock_store = MockStore::new();
        mock_store.expect_add().returning(|_, _| Ok(()));

        let service = LinkService::new(Arc::new(mock_store), "https://s.example.com/");

        let link = service
            .shorten("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(service.domain(), "https://s.example.com");
        assert_eq!(link.short_url, "https://s.example.com/327c3fda87");
    }

    #[tokio::test]
    async fn test_shorten_existing_code() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_add()
            .times(1)
            .returning(|_, _| Err(StoreError::AlreadyExists));

        let service = LinkService::new(Arc::new(mock_store), "http://localhost:8080");

        let result = service.shorten("http://example.com".to_string()).await;

        assert!(matches!(result, Err(StoreError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_resolve_delegates_to_store() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_get()
            .withf(|code| code == "abc")
            .times(1)
            .returning(|_| Ok("https://example.com".to_string()));

        let service = LinkService::new(Arc::new(mock_store), "http://localhost:8080");

        assert_eq!(service.resolve("abc").await.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_get()
            .returning(|_| Err(StoreError::NotFound));

        let service = LinkService::new(Arc::new(mock_store), "http://localhost:8080");

        assert!(matches!(
            service.resolve("missing").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut mock_store = MockStore::new();
        mock_store
            .expect_remove()
            .withf(|code| code == "missing")
            .times(1)
            .returning(|_| Err(StoreError::NotFound));

        let service = LinkService::new(Arc::new(mock_store), "http://localhost:8080");

        assert!(matches!(
            service.delete("missing").await,
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_backend_name() {
        let mut mock_store = MockStore::new();
        mock_store.expect_backend().return_const("memory");

        let service = LinkService::new(Arc::new(mock_store), "http://localhost:8080");

        assert_eq!(service.backend(), "memory");
    }
}
