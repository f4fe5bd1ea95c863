//! Storage Module
//!
//! Append-only history of successful lookups, behind the [`LookupStore`] trait.

mod record;
mod sqlite;


use async_trait::async_trait;

use crate::models::AccountInfo;

pub use record::AddressLookupRecord;
pub use sqlite::SqliteStore;

/// Durable log of lookups.
///
/// Records are only ever appended; the same address may appear any number of times.
#[async_trait]
pub trait LookupStore: Send + Sync {
    /// Appends a record stamped with the current time and returns it with its id.
    async fn insert(&self, address: &str, info: &AccountInfo) -> Result<AddressLookupRecord, sqlx::Error>;

    /// Total number of records.
    async fn count(&self) -> Result<i64, sqlx::Error>;

    /// Newest-first slice of the history.
    async fn list_recent(&self, offset: i64, limit: i64) -> Result<Vec<AddressLookupRecord>, sqlx::Error>;
}
