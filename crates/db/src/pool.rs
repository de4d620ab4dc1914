//! Postgres pool settings and start-up.
//!
//! The service holds a single pool for the `documents` table.  Requests
//! wait at most `acquire_timeout` for a connection, so an exhausted or
//! unreachable database surfaces as a store error instead of a hung request.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::DbError;

pub type DbPool = PgPool;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl PoolSettings {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

/// Open the pool described by `settings`.
pub async fn connect(settings: &PoolSettings) -> Result<DbPool, DbError> {
    info!(
        max_connections = settings.max_connections,
        acquire_timeout_ms = settings.acquire_timeout.as_millis() as u64,
        "Connecting to document database"
    );
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.database_url)
        .await?;
    Ok(pool)
}

/// Bring the `documents` schema up to date (migrations under `/migrations`).
pub async fn migrate(pool: &DbPool) -> Result<(), DbError> {
    info!("Applying document schema migrations");
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_to_service_limits() {
        let settings = PoolSettings::new("postgres://localhost/routines");
        assert_eq!(settings.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(settings.acquire_timeout, DEFAULT_ACQUIRE_TIMEOUT);
    }

    #[test]
    fn max_connections_never_drops_to_zero() {
        let settings = PoolSettings::new("postgres://localhost/routines").max_connections(0);
        assert_eq!(settings.max_connections, 1);
    }

    #[tokio::test]
    async fn invalid_url_is_a_store_error() {
        let settings = PoolSettings::new("not a database url")
            .acquire_timeout(Duration::from_millis(100));
        let err = connect(&settings).await.unwrap_err();
        assert!(matches!(err, DbError::Sqlx(_)));
    }
}
