//! Postgres-backed [`DocumentStore`].

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::pool::{self, PoolSettings};
use crate::repository::documents;
use crate::store::{ensure_object, DocumentStore};
use crate::{DbError, DbPool};

pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open a pool and migrate the `documents` table before serving.
    pub async fn connect(settings: &PoolSettings) -> Result<Self, DbError> {
        let pool = pool::connect(settings).await?;
        pool::migrate(&pool).await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    #[instrument(skip(self))]
    async fn get(&self, collection: &str, doc_count: usize) -> Result<Vec<Value>, DbError> {
        let limit = i64::try_from(doc_count).unwrap_or(i64::MAX);
        let rows = documents::list_documents(&self.pool, collection, limit).await?;
        debug!(found = rows.len(), "documents fetched");
        Ok(rows.into_iter().map(|row| row.body).collect())
    }

    #[instrument(skip(self, record))]
    async fn insert(&self, collection: &str, record: Value) -> Result<(), DbError> {
        ensure_object(collection, &record)?;
        let row = documents::insert_document(&self.pool, collection, record).await?;
        debug!(id = %row.id, "document inserted");
        Ok(())
    }
}
