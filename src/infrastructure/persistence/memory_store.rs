//! In-process implementation of the store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::{Store, StoreError};

/// Store backed by a process-local map.
///
/// Mappings live until the process exits. Reads share the lock, mutations
/// take it exclusively, so the existence check and the insert in
/// [`Store::add`] happen atomically.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mappings currently held.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn add(&self, code: &str, url: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        if items.contains_key(code) {
            return Err(StoreError::AlreadyExists);
        }
        items.insert(code.to_string(), url.to_string());
        debug!(code, entries = items.len(), "Added mapping");
        Ok(())
    }

    async fn remove(&self, code: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        if items.remove(code).is_none() {
            return Err(StoreError::NotFound);
        }
        debug!(code, entries = items.len(), "Removed mapping");
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<String, StoreError> {
        self.items
            .read()
            .await
            .get(code)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_add_then_get() {
        let store = MemoryStore::new();
        store.add("abc", "https://example.com").await.unwrap();

        assert_eq!(store.get("abc").await.unwrap(), "https://example.com");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_add_existing_keeps_original() {
        let store = MemoryStore::new();
        store.add("abc", "https://first.com").await.unwrap();

        let result = store.add("abc", "https://second.com").await;

        assert!(matches!(result, Err(StoreError::AlreadyExists)));
        assert_eq!(store.get("abc").await.unwrap(), "https://first.com");
    }

    #[tokio::test]
    async fn test_remove_missing() {
        let store = MemoryStore::new();

        let result = store.remove("missing").await;

        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_remove_then_get() {
        let store = MemoryStore::new();
        store.add("abc", "https://example.com").await.unwrap();
        store.remove("abc").await.unwrap();

        assert!(matches!(store.get("abc").await, Err(StoreError::NotFound)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_empty_url_counts_as_present() {
        let store = MemoryStore::new();
        store.add("empty", "").await.unwrap();

        assert_eq!(store.get("empty").await.unwrap(), "");
        assert!(matches!(
            store.add("empty", "https://example.com").await,
            Err(StoreError::AlreadyExists)
        ));
        assert!(store.remove("empty").await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_same_code_single_winner() {
        let store = Arc::new(MemoryStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.add("same", &format!("https://{i}.com")).await })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(store.len().await, 1);
    }
}
