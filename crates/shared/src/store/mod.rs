//! Document storage behind the repositories.
//!
//! A [`Store`] keeps JSON documents grouped in named collections. Listing a
//! collection returns documents in insertion order; overwriting a key keeps
//! its first position.

mod memory;
mod sqlite;

use std::{marker::PhantomData, sync::Arc};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::Result;

#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>>;

    async fn put(&self, collection: &str, key: &str, value: Value) -> Result<()>;

    /// Returns whether the key existed.
    async fn delete(&self, collection: &str, key: &str) -> Result<bool>;

    async fn list(&self, collection: &str) -> Result<Vec<(String, Value)>>;

    async fn clear(&self, collection: &str) -> Result<()>;
}

#[async_trait::async_trait]
impl<T: Store + ?Sized> Store for Arc<T> {
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Value>> {
        (**self).get(collection, key).await
    }

    async fn put(&self, collection: &str, key: &str, value: Value) -> Result<()> {
        (**self).put(collection, key, value).await
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<bool> {
        (**self).delete(collection, key).await
    }

    async fn list(&self, collection: &str) -> Result<Vec<(String, Value)>> {
        (**self).list(collection).await
    }

    async fn clear(&self, collection: &str) -> Result<()> {
        (**self).clear(collection).await
    }
}

/// Typed view over one collection of a [`Store`].
pub struct Documents<S, T> {
    store: S,
    collection: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<S: Clone, T> Clone for Documents<S, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            collection: self.collection,
            _marker: PhantomData,
        }
    }
}

impl<S: Store, T: Serialize + DeserializeOwned> Documents<S, T> {
    pub fn new(store: S, collection: &'static str) -> Self {
        Self {
            store,
            collection,
            _marker: PhantomData,
        }
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub async fn get(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(self.collection, key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub async fn put(&self, key: &str, document: &T) -> Result<()> {
        let value = serde_json::to_value(document)?;

        self.store.put(self.collection, key, value).await
    }

    pub async fn delete(&self, key: &str) -> Result<bool> {
        self.store.delete(self.collection, key).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.clear(self.collection).await
    }

    /// All documents in insertion order. Documents that no longer decode are
    /// skipped.
    pub async fn all(&self) -> Result<Vec<T>> {
        Ok(self.entries().await?.into_iter().map(|(_, doc)| doc).collect())
    }

    pub async fn entries(&self) -> Result<Vec<(String, T)>> {
        let rows = self.store.list(self.collection).await?;
        let mut documents = Vec::with_capacity(rows.len());

        for (key, value) in rows {
            match serde_json::from_value(value) {
                Ok(document) => documents.push((key, document)),
                Err(err) => {
                    tracing::warn!(
                        collection = self.collection,
                        key = %key,
                        error = %err,
                        "skipping malformed document"
                    );
                }
            }
        }

        Ok(documents)
    }
}
