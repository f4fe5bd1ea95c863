//! Tron Lookup - account resource lookups for the Tron network
//!
//! Validates an address against TronGrid, serves bandwidth, energy and balance
//! through a short-lived LRU cache, retries transient network failures, and
//! records every successful lookup in a SQLite history table.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod ledger;
pub mod lookup;
pub mod models;
pub mod retry;
pub mod storage;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
