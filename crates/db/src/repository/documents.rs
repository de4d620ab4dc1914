//! Document insert and listing.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{DbError, models::DocumentRow};

/// Insert `body` into `collection`.
pub async fn insert_document(
    pool: &PgPool,
    collection: &str,
    body: serde_json::Value,
) -> Result<DocumentRow, DbError> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query_as::<_, DocumentRow>(
        r#"
        INSERT INTO documents (id, collection, body, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, collection, body, created_at
        "#,
    )
    .bind(id)
    .bind(collection)
    .bind(body)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Return at most `limit` documents of `collection`, oldest first.
pub async fn list_documents(
    pool: &PgPool,
    collection: &str,
    limit: i64,
) -> Result<Vec<DocumentRow>, DbError> {
    let rows = sqlx::query_as::<_, DocumentRow>(
        r#"
        SELECT id, collection, body, created_at
        FROM documents
        WHERE collection = $1
        ORDER BY created_at ASC
        LIMIT $2
        "#,
    )
    .bind(collection)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
