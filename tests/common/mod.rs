#![allow(dead_code)]

use sha_shortener::application::services::LinkService;
use sha_shortener::domain::repositories::Store;
use sha_shortener::infrastructure::persistence::{FileStore, MemoryStore};
use sha_shortener::state::AppState;
use std::path::Path;
use std::sync::Arc;

pub const TEST_DOMAIN: &str = "http://localhost:8080";

pub fn create_test_state(store: Arc<dyn Store>) -> AppState {
    AppState::new(Arc::new(LinkService::new(store, TEST_DOMAIN)))
}

pub fn create_memory_state() -> AppState {
    create_test_state(Arc::new(MemoryStore::new()))
}

pub async fn create_file_state(path: &Path) -> AppState {
    let store = FileStore::open(path).await.unwrap();
    create_test_state(Arc::new(store))
}

/// Seeds a mapping directly through the store, bypassing the handlers.
pub async fn create_test_link(state: &AppState, url: &str) -> String {
    state.link_service.shorten(url.to_string()).await.unwrap().code
}
