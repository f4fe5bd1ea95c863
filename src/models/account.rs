//! Account resource snapshot shared by the cache, the history store and the API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bandwidth, energy and balance of a single Tron account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Network bandwidth allowance (`NetLimit`)
    pub bandwidth: i64,
    /// Energy allowance (`EnergyLimit`)
    pub energy: i64,
    /// Balance in TRX, serialized as a decimal string
    pub balance: Decimal,
}

impl AccountInfo {
    pub fn new(bandwidth: i64, energy: i64, balance: Decimal) -> Self {
        Self {
            bandwidth,
            energy,
            balance,
        }
    }
}
