//! Error types for the lookup service
//!
//! Every pipeline failure funnels into [`LookupError`], which renders itself
//! as a `{"detail": ...}` JSON body with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::models::ErrorResponse;

// == Lookup Error Enum ==
/// Unified error type for the lookup pipeline and history queries.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Address is malformed or does not exist on the ledger
    #[error("Invalid Tron address: {0}")]
    InvalidAddress(String),

    /// Connection or HTTP transport failure, after retries were exhausted
    #[error("Network error: {0}")]
    Network(String),

    /// Ledger answered, but not with something usable
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Persistence or query failure
    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// History query parameters out of range
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl From<LedgerError> for LookupError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Network(msg) => LookupError::Network(msg),
            other => LookupError::Upstream(other.to_string()),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            LookupError::InvalidAddress(_) => {
                (StatusCode::BAD_REQUEST, "Invalid Tron address".to_string())
            }
            LookupError::Network(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Network error: {}", msg),
            ),
            LookupError::Upstream(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", msg),
            ),
            // Driver detail stays in the server log
            LookupError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error: database error".to_string(),
            ),
            LookupError::InvalidQuery(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup service.
pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: LookupError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_address_is_bad_request() {
        let (status, body) = render(LookupError::InvalidAddress("nope".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Invalid Tron address");
    }

    #[tokio::test]
    async fn test_network_error_carries_message() {
        let (status, body) = render(LookupError::Network("connection refused".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Network error: connection refused");
    }

    #[tokio::test]
    async fn test_store_error_is_sanitized() {
        let (status, body) = render(LookupError::Store(sqlx::Error::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Internal server error: database error");
    }

    #[tokio::test]
    async fn test_invalid_query_is_unprocessable() {
        let (status, body) = render(LookupError::InvalidQuery("page must be >= 1".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "page must be >= 1");
    }

    #[test]
    fn test_ledger_error_mapping() {
        let network: LookupError = LedgerError::Network("timed out".into()).into();
        assert!(matches!(network, LookupError::Network(msg) if msg == "timed out"));

        let missing: LookupError = LedgerError::AccountNotFound("TXYZ".into()).into();
        assert!(matches!(missing, LookupError::Upstream(_)));
    }
}
