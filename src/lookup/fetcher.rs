//! Account resource fetching

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::error::{LookupError, Result};
use crate::ledger::{LedgerApi, LedgerError};
use crate::lookup::AddressValidator;
use crate::models::AccountInfo;
use crate::retry::RetryPolicy;

/// Produces a fresh account snapshot from the ledger.
#[async_trait]
pub trait AccountFetcher: Send + Sync {
    async fn fetch_account_info(&self, address: &str) -> Result<AccountInfo>;
}

/// Fetcher that reads resources and balance from the ledger.
///
/// The resource and balance reads are retried independently.
pub struct LedgerFetcher {
    ledger: Arc<dyn LedgerApi>,
    validator: Arc<dyn AddressValidator>,
    retry: RetryPolicy,
}

impl LedgerFetcher {
    pub fn new(
        ledger: Arc<dyn LedgerApi>,
        validator: Arc<dyn AddressValidator>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            ledger,
            validator,
            retry,
        }
    }

    async fn read_snapshot(&self, address: &str) -> std::result::Result<AccountInfo, LedgerError> {
        let resource = self
            .retry
            .run("get_account_resource", LedgerError::is_network, || {
                self.ledger.get_account_resource(address)
            })
            .await?;

        let balance = self
            .retry
            .run("get_account_balance", LedgerError::is_network, || {
                self.ledger.get_account_balance(address)
            })
            .await?;

        Ok(AccountInfo::new(resource.bandwidth(), resource.energy(), balance))
    }
}

#[async_trait]
impl AccountFetcher for LedgerFetcher {
    async fn fetch_account_info(&self, address: &str) -> Result<AccountInfo> {
        // Callers validated already; an account vanishing here is an upstream fault
        if !self.validator.validate(address).await? {
            return Err(LookupError::Upstream(format!(
                "Invalid Tron address: {}",
                address
            )));
        }

        match self.read_snapshot(address).await {
            Ok(info) => {
                info!(%address, "Successfully retrieved info for address");
                Ok(info)
            }
            Err(err) => {
                error!(%address, error = %err, "Failed to retrieve info for address");
                Err(err.into())
            }
        }
    }
}
