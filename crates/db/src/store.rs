//! The `DocumentStore` trait — the only way the HTTP layer touches storage.

use async_trait::async_trait;
use serde_json::Value;

use crate::DbError;

/// A collection-oriented document store.
///
/// Constructed once at start-up and shared (behind an `Arc`) by every
/// request handler.  Implementations own their own concurrency control.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return at most `doc_count` records of `collection`.
    async fn get(&self, collection: &str, doc_count: usize) -> Result<Vec<Value>, DbError>;

    /// Append `record` to `collection`.  `record` must be a JSON object.
    async fn insert(&self, collection: &str, record: Value) -> Result<(), DbError>;
}

/// Reject anything that is not a JSON object.
pub(crate) fn ensure_object(collection: &str, record: &Value) -> Result<(), DbError> {
    if record.is_object() {
        Ok(())
    } else {
        Err(DbError::InvalidRecord {
            collection: collection.to_string(),
            reason: "record must be a JSON object".to_string(),
        })
    }
}
