//! Address validation against the ledger

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::ledger::{LedgerApi, LedgerError};
use crate::retry::RetryPolicy;

/// Bitcoin-style Base58 alphabet used by Tron addresses.
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const ADDRESS_LENGTH: usize = 34;

/// Decides whether an address names an existing account.
#[async_trait]
pub trait AddressValidator: Send + Sync {
    /// `Ok(false)` for malformed or unknown addresses; network failures are errors.
    async fn validate(&self, address: &str) -> Result<bool>;
}

/// Cheap local shape check: 34 Base58 characters starting with `T`.
pub fn is_well_formed(address: &str) -> bool {
    address.len() == ADDRESS_LENGTH
        && address.starts_with('T')
        && address.chars().all(|c| BASE58_ALPHABET.contains(c))
}

/// Validator backed by a ledger account lookup.
pub struct LedgerValidator {
    ledger: Arc<dyn LedgerApi>,
    retry: RetryPolicy,
}

impl LedgerValidator {
    pub fn new(ledger: Arc<dyn LedgerApi>, retry: RetryPolicy) -> Self {
        Self { ledger, retry }
    }
}

#[async_trait]
impl AddressValidator for LedgerValidator {
    async fn validate(&self, address: &str) -> Result<bool> {
        if !is_well_formed(address) {
            warn!(%address, "Invalid Tron address attempted: malformed");
            return Ok(false);
        }

        let lookup = self
            .retry
            .run("validate_tron_address", LedgerError::is_network, || {
                self.ledger.get_account(address)
            })
            .await;

        match lookup {
            Ok(_) => Ok(true),
            Err(LedgerError::AccountNotFound(_)) => {
                warn!(%address, "Invalid Tron address attempted: account not found");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}
