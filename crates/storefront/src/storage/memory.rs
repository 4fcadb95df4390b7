//! In-memory storage for tests.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::{KeyValueStore, StorageError};

/// Key-value store held in process memory.
///
/// Clones share the same map, like two tabs of one browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let mut items = HashMap::new();
        items.insert(key.to_owned(), value.to_owned());
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }
}

impl KeyValueStore for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.items.lock().await.insert(key.to_owned(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_items() {
        let storage = MemoryStorage::new();
        let other_tab = storage.clone();

        storage.set_item("cart", "{}".to_owned()).await.ok();
        let value = other_tab.get_item("cart").await.ok().flatten();
        assert_eq!(value.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let storage = MemoryStorage::with_item("cart", r#"{"lent":1}"#);
        storage
            .set_item("cart", r#"{"easter":2}"#.to_owned())
            .await
            .ok();
        let value = storage.get_item("cart").await.ok().flatten();
        assert_eq!(value.as_deref(), Some(r#"{"easter":2}"#));
    }
}
