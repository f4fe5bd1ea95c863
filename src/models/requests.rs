//! Request DTOs for the lookup service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Largest page a history query may ask for.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Request body for `POST /address_info`
#[derive(Debug, Clone, Deserialize)]
pub struct AddressRequest {
    /// Base58 Tron address to look up
    pub address: String,
}

/// Query string for `GET /recent_requests`
///
/// Signed so that out-of-range values reach [`HistoryQuery::validate`]
/// instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Records per page, 1..=100
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl HistoryQuery {
    /// Validates the query parameters
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.page < 1 {
            return Some("page must be greater than or equal to 1".to_string());
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Some(format!(
                "page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            ));
        }
        None
    }

    /// Number of records skipped before this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}
