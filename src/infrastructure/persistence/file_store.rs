//! JSON-file implementation of the store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::repositories::{Store, StoreError};

/// Format version written into newly created documents.
pub const DOCUMENT_VERSION: &str = "1.0";

/// On-disk layout: `{"version": "1.0", "items": {"<code>": "<url>", ...}}`.
#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    version: String,
    #[serde(default)]
    items: BTreeMap<String, String>,
}

impl StoreDocument {
    fn empty() -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            items: BTreeMap::new(),
        }
    }
}

/// Store backed by a single JSON document on disk.
///
/// Every call reads and parses the whole file; `add` and `remove` then
/// rewrite it. Calls on one instance are serialized by an internal mutex, and
/// rewrites go through a sibling `.tmp` file renamed over the document, so a
/// crash mid-write leaves the previous version intact.
///
/// Two `FileStore` instances pointed at the same path do not coordinate with
/// each other.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Opens the store at `path`, creating an empty document if the file
    /// does not exist.
    ///
    /// An existing file is not read here; a malformed document is reported as
    /// [`StoreError::Corrupted`] by the first operation that touches it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the initial document cannot be written.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };

        if !fs::try_exists(&store.path).await? {
            if let Some(parent) = store.path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).await?;
            }
            store.write_document(&StoreDocument::empty()).await?;
            info!(path = %store.path.display(), "Created new store file");
        }

        Ok(store)
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All mappings, ordered by code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] or [`StoreError::Corrupted`] if the document
    /// cannot be loaded.
    pub async fn entries(&self) -> Result<Vec<(String, String)>, StoreError> {
        let _guard = self.lock.lock().await;
        let document = self.read_document().await?;
        Ok(document.items.into_iter().collect())
    }

    async fn read_document(&self) -> Result<StoreDocument, StoreError> {
        let raw = fs::read(&self.path).await?;
        serde_json::from_slice(&raw).map_err(StoreError::Corrupted)
    }

    async fn write_document(&self, document: &StoreDocument) -> Result<(), StoreError> {
        let raw = serde_json::to_vec(document).map_err(StoreError::Serialization)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, raw).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl Store for FileStore {
    async fn add(&self, code: &str, url: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        if document.items.contains_key(code) {
            return Err(StoreError::AlreadyExists);
        }
        document.items.insert(code.to_string(), url.to_string());
        self.write_document(&document).await?;
        debug!(code, entries = document.items.len(), "Added mapping");
        Ok(())
    }

    async fn remove(&self, code: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        if document.items.remove(code).is_none() {
            return Err(StoreError::NotFound);
        }
        self.write_document(&document).await?;
        debug!(code, entries = document.items.len(), "Removed mapping");
        Ok(())
    }

    async fn get(&self, code: &str) -> Result<String, StoreError> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;
        document.items.remove(code).ok_or(StoreError::NotFound)
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_in(dir: &TempDir) -> FileStore {
        FileStore::open(dir.path().join("store.json")).await.unwrap()
    }

    #[tokio::test]
    async fn test_open_creates_empty_document() {
        let dir = TempDir::new().unwrap();
        let store = open_in(&dir).await;

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, r#"{"version":"1.0","items":{}}"#);
    }

    #[tokio::test]
    async fn test_open_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/store.json");

        let store = FileStore::open(&path).await.unwrap();

        assert!(path.exists());
        assert!(store.entries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_open_leaves_existing_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "garbage").unwrap();

        let store = FileStore::open(&path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "garbage");
        assert!(matches!(
            store.get("abc").await,
            Err(StoreError::Corrupted(_))
        ));
    }

    #[tokio::test]
    async fn test_add_writes_compact_sorted_document() {
        let dir = TempDir::new().unwrap();
        let store = open_in(&dir).await;

        store.add("bbb", "https://b.com").await.unwrap();
        store.add("aaa", "https://a.com").await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            raw,
            r#"{"version":"1.0","items":{"aaa":"https://a.com","bbb":"https://b.com"}}"#
        );
        assert!(!store.tmp_path().exists());
    }

    #[tokio::test]
    async fn test_document_without_items_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, r#"{"version":"1.0"}"#).unwrap();

        let store = FileStore::open(&path).await.unwrap();
        store.add("abc", "https://example.com").await.unwrap();

        assert_eq!(store.get("abc").await.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_document_without_version_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, r#"{"items":{"abc":"https://example.com"}}"#).unwrap();

        let store = FileStore::open(&path).await.unwrap();

        assert_eq!(store.get("abc").await.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_entries_sorted_by_code() {
        let dir = TempDir::new().unwrap();
        let store = open_in(&dir).await;
        store.add("zz", "https://z.com").await.unwrap();
        store.add("aa", "https://a.com").await.unwrap();

        let entries = store.entries().await.unwrap();

        assert_eq!(
            entries,
            vec![
                ("aa".to_string(), "https://a.com".to_string()),
                ("zz".to_string(), "https://z.com".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_file_after_open_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store = open_in(&dir).await;
        std::fs::remove_file(store.path()).unwrap();

        assert!(matches!(store.get("abc").await, Err(StoreError::Io(_))));
    }
}
