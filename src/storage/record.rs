//! Persisted lookup record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// One row of `tron_address_info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressLookupRecord {
    pub id: i64,
    pub address: String,
    pub bandwidth: i64,
    pub energy: i64,
    pub balance: Decimal,
    pub timestamp: DateTime<Utc>,
}

// Balance is kept as TEXT so the decimal survives exactly
impl<'r> FromRow<'r, SqliteRow> for AddressLookupRecord {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let balance: String = row.try_get("balance")?;
        let balance = balance
            .parse::<Decimal>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "balance".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: row.try_get("id")?,
            address: row.try_get("address")?,
            bandwidth: row.try_get("bandwidth")?,
            energy: row.try_get("energy")?,
            balance,
            timestamp: row.try_get("timestamp")?,
        })
    }
}
