//! Opening the PostgreSQL-backed store

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use super::postgres::PgProductStore;
use super::schema::ensure_schema;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection before failing with 500
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for the products database
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
        self.max_connections = max_connections;
        self
    }
}

/// Connect, make sure the `products` table exists, and hand back the store.
///
/// ```ignore
/// let store = open_pg_store(&PoolSettings::new(database_url)).await?;
/// ```
pub async fn open_pg_store(settings: &PoolSettings) -> Result<PgProductStore, sqlx::Error> {
    tracing::debug!(
        max_connections = settings.max_connections,
        acquire_timeout_ms = settings.acquire_timeout.as_millis() as u64,
        "connecting to products database"
    );

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect(&settings.database_url)
        .await?;

    ensure_schema(&pool).await?;
    Ok(PgProductStore::new(pool))
}
