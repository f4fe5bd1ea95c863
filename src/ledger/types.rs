//! Wire types for the TronGrid full-node HTTP API

use serde::{Deserialize, Serialize};

/// Request body shared by the account endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct AddressQuery<'a> {
    pub address: &'a str,
    /// Addresses are passed and returned in Base58 form
    pub visible: bool,
}

/// Subset of `/wallet/getaccount`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub address: Option<String>,
    /// Balance in sun
    #[serde(default)]
    pub balance: Option<i64>,
    #[serde(default)]
    pub create_time: Option<i64>,
}

/// Subset of `/wallet/getaccountresource`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountResource {
    #[serde(rename = "freeNetLimit", default)]
    pub free_net_limit: Option<i64>,
    #[serde(rename = "NetLimit", default)]
    pub net_limit: Option<i64>,
    #[serde(rename = "EnergyLimit", default)]
    pub energy_limit: Option<i64>,
}

impl AccountResource {
    /// Staked bandwidth, 0 when the account has none.
    pub fn bandwidth(&self) -> i64 {
        self.net_limit.unwrap_or(0)
    }

    /// Staked energy, 0 when the account has none.
    pub fn energy(&self) -> i64 {
        self.energy_limit.unwrap_or(0)
    }
}
