//! Response DTOs for the lookup service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::AccountInfo;
use crate::storage::AddressLookupRecord;

/// Response body for `POST /address_info`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResponse {
    /// The queried address
    pub address: String,
    /// Network bandwidth allowance
    pub bandwidth: i64,
    /// Energy allowance
    pub energy: i64,
    /// Balance in TRX
    pub balance: Decimal,
}

impl LookupResponse {
    /// Creates a new LookupResponse from a fetched or cached snapshot
    pub fn new(address: impl Into<String>, info: AccountInfo) -> Self {
        Self {
            address: address.into(),
            bandwidth: info.bandwidth,
            energy: info.energy,
            balance: info.balance,
        }
    }
}

/// Response body for `GET /recent_requests`
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    /// Total number of stored lookups, independent of paging
    pub total: i64,
    /// Requested page
    pub page: i64,
    /// Requested page size
    pub page_size: i64,
    /// Records on this page, newest first
    pub data: Vec<AddressLookupRecord>,
}

/// Response body for the cache stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, evictions: u64, total_entries: usize) -> Self {
        let total_requests = hits + misses;
        let hit_rate = if total_requests > 0 {
            hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            evictions,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub detail: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_lookup_response_serialize() {
        let resp = LookupResponse::new(
            "TFjnjGvy8GLP63CDkX2eWQBYHRUzvN619g",
            AccountInfo::new(0, 0, Decimal::new(88946, 6)),
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address": "TFjnjGvy8GLP63CDkX2eWQBYHRUzvN619g",
                "bandwidth": 0,
                "energy": 0,
                "balance": "0.088946"
            })
        );
    }

    #[test]
    fn test_history_response_serialize() {
        let record = AddressLookupRecord {
            id: 7,
            address: "test_0".to_string(),
            bandwidth: 1000,
            energy: 5000,
            balance: Decimal::new(100, 0),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };
        let resp = HistoryResponse {
            total: 1,
            page: 1,
            page_size: 10,
            data: vec![record],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["page_size"], 10);
        assert_eq!(json["data"][0]["id"], 7);
        assert_eq!(json["data"][0]["balance"], "100");
        assert_eq!(json["data"][0]["timestamp"], "2024-05-01T12:30:00Z");
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let resp = StatsResponse::new(80, 20, 5, 100);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::new(0, 0, 0, 0);
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Invalid Tron address");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"detail":"Invalid Tron address"}"#);
    }
}
