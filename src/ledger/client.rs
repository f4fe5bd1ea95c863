//! TronGrid HTTP client

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::ledger::error::{LedgerError, Result};
use crate::ledger::types::{Account, AccountResource, AddressQuery};

/// Header TronGrid reads the API key from.
pub const API_KEY_HEADER: &str = "TRON-PRO-API-KEY";

/// Balances come back in sun; 1 TRX = 10^6 sun.
pub const SUN_PER_TRX_SCALE: u32 = 6;

// == Ledger API ==
/// Read operations the lookup pipeline needs from the ledger.
///
/// None of these retry on their own; callers wrap them in a
/// [`RetryPolicy`](crate::retry::RetryPolicy).
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Fetches the account, failing with [`LedgerError::AccountNotFound`] if it does not exist.
    async fn get_account(&self, address: &str) -> Result<Account>;

    /// Fetches bandwidth and energy limits.
    async fn get_account_resource(&self, address: &str) -> Result<AccountResource>;

    /// Fetches the balance in TRX.
    async fn get_account_balance(&self, address: &str) -> Result<Decimal>;
}

/// Client for the TronGrid full-node HTTP API.
pub struct TronGridClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl TronGridClient {
    /// Create a client with the default 30 second request timeout
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self> {
        Self::with_timeout(base_url, api_key, Duration::from_secs(30))
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LedgerError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// POSTs `{"address", "visible": true}` to `path` and returns the JSON body.
    async fn post(&self, path: &str, address: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, %address, "TronGrid request");

        let mut request = self.http.post(&url).json(&AddressQuery {
            address,
            visible: true,
        });
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::Network(format!(
                "HTTP {} from {}",
                status, path
            )));
        }

        let body: Value = response.json().await?;
        if let Some(err) = body.get("Error") {
            let message = err
                .as_str()
                .map(str::to_owned)
                .unwrap_or_else(|| err.to_string());
            return Err(LedgerError::Upstream(message));
        }

        Ok(body)
    }

    async fn post_as<T: DeserializeOwned>(&self, path: &str, address: &str) -> Result<T> {
        let body = self.post(path, address).await?;
        serde_json::from_value(body)
            .map_err(|e| LedgerError::Upstream(format!("unexpected response from {}: {}", path, e)))
    }
}

#[async_trait]
impl LedgerApi for TronGridClient {
    async fn get_account(&self, address: &str) -> Result<Account> {
        let body = self.post("/wallet/getaccount", address).await?;

        // Unknown accounts come back as `{}`
        if body.as_object().map_or(true, |fields| fields.is_empty()) {
            return Err(LedgerError::AccountNotFound(address.to_string()));
        }

        serde_json::from_value(body)
            .map_err(|e| LedgerError::Upstream(format!("unexpected account payload: {}", e)))
    }

    async fn get_account_resource(&self, address: &str) -> Result<AccountResource> {
        self.post_as("/wallet/getaccountresource", address).await
    }

    async fn get_account_balance(&self, address: &str) -> Result<Decimal> {
        let account = self.get_account(address).await?;
        let sun = account.balance.unwrap_or(0);
        Ok(Decimal::new(sun, SUN_PER_TRX_SCALE).normalize())
    }
}
