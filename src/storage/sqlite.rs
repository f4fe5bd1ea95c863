//! SQLite-backed lookup history

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::models::AccountInfo;
use crate::storage::{AddressLookupRecord, LookupStore};

const RECORD_COLUMNS: &str = "id, address, bandwidth, energy, balance, timestamp";

/// Lookup history stored in a single `tron_address_info` table.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database at `database_url` and bring the schema up to date.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        info!("Connecting to database...");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        info!("Database connection established");

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Private in-memory database, used by tests.
    ///
    /// A single connection that never idles out, since every new
    /// `:memory:` connection would open an empty database.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Run schema migrations (tracked in `_sqlx_migrations`)
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        info!("Running database migrations...");
        sqlx::migrate!()
            .run(&self.pool)
            .await
            .map_err(|e| sqlx::Error::Protocol(e.to_string()))?;
        info!("Database migrations completed");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl LookupStore for SqliteStore {
    async fn insert(&self, address: &str, info: &AccountInfo) -> Result<AddressLookupRecord, sqlx::Error> {
        debug!(%address, "Persisting lookup record");

        let sql = format!(
            "INSERT INTO tron_address_info (address, bandwidth, energy, balance, timestamp) \
             VALUES (?, ?, ?, ?, ?) RETURNING {}",
            RECORD_COLUMNS
        );

        sqlx::query_as::<_, AddressLookupRecord>(&sql)
            .bind(address)
            .bind(info.bandwidth)
            .bind(info.energy)
            .bind(info.balance.to_string())
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tron_address_info")
            .fetch_one(&self.pool)
            .await
    }

    async fn list_recent(&self, offset: i64, limit: i64) -> Result<Vec<AddressLookupRecord>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM tron_address_info \
             ORDER BY timestamp DESC, id DESC LIMIT ? OFFSET ?",
            RECORD_COLUMNS
        );

        sqlx::query_as::<_, AddressLookupRecord>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }
}
