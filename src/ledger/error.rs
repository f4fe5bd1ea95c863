//! Error types for the TronGrid client

use thiserror::Error;

/// Errors that can occur when talking to the ledger API.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Connection, timeout or non-2xx HTTP status
    #[error("{0}")]
    Network(String),

    /// The ledger has no account at this address
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Ledger returned an application error or an unreadable body
    #[error("TronGrid error: {0}")]
    Upstream(String),
}

impl LedgerError {
    /// True for transport-level failures, the only kind worth retrying.
    pub fn is_network(&self) -> bool {
        matches!(self, LedgerError::Network(_))
    }
}

impl From<reqwest::Error> for LedgerError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            LedgerError::Upstream(format!("invalid response body: {}", e))
        } else {
            LedgerError::Network(e.to_string())
        }
    }
}

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;
