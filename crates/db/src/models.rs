//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Domain types live in the `routines` crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// documents
// ---------------------------------------------------------------------------

/// A stored document.  Every collection shares the one `documents` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub collection: String,
    /// The record exactly as it was inserted.
    pub body: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
