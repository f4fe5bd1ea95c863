//! Ledger Module
//!
//! TronGrid HTTP client and the [`LedgerApi`] seam the lookup pipeline talks to.

mod client;
mod error;
mod types;

pub use client::{LedgerApi, TronGridClient, API_KEY_HEADER, SUN_PER_TRX_SCALE};
pub use error::{LedgerError, Result};
pub use types::{Account, AccountResource};
