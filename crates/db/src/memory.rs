//! `MemoryDocumentStore` — an in-process [`DocumentStore`].
//!
//! Backs `serve --in-memory` and the HTTP tests.  Documents live only as
//! long as the process.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::store::{ensure_object, DocumentStore};
use crate::DbError;

#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose `collection` already holds `records`.
    pub fn with_records(collection: impl Into<String>, records: Vec<Value>) -> Self {
        let mut collections = HashMap::new();
        collections.insert(collection.into(), records);
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Snapshot of everything stored in `collection`, in insertion order.
    pub async fn records(&self, collection: &str) -> Vec<Value> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, collection: &str, doc_count: usize) -> Result<Vec<Value>, DbError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| records.iter().take(doc_count).cloned().collect())
            .unwrap_or_default())
    }

    async fn insert(&self, collection: &str, record: Value) -> Result<(), DbError> {
        ensure_object(collection, &record)?;
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(record);
        Ok(())
    }
}
