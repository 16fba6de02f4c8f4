use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;

use super::Store;
use crate::Result;

/// In-process store, used for fixtures and tests.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<(String, Value)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|(k, _)| k == key))
            .map(|(_, value)| value.clone()))
    }

    async fn put(&self, collection: &str, key: &str, value: Value) -> Result<()> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_owned()).or_default();

        match docs.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => docs.push((key.to_owned(), value)),
        }

        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<bool> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };

        let before = docs.len();
        docs.retain(|(k, _)| k != key);

        Ok(docs.len() != before)
    }

    async fn list(&self, collection: &str) -> Result<Vec<(String, Value)>> {
        let collections = self.collections.read().await;

        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn clear(&self, collection: &str) -> Result<()> {
        self.collections.write().await.remove(collection);

        Ok(())
    }
}
