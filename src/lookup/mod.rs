//! Lookup Module
//!
//! The address lookup pipeline: validate, consult the cache, fetch upstream
//! with retries, persist, respond.

mod fetcher;
mod service;
mod validator;

pub use fetcher::{AccountFetcher, LedgerFetcher};
pub use service::LookupService;
pub use validator::{is_well_formed, AddressValidator, LedgerValidator, BASE58_ALPHABET};
