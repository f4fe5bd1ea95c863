//! Cache Module
//!
//! Short-lived, size-bounded cache of account snapshots keyed by address,
//! with TTL expiration and LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

/// Cache handle shared between request handlers and the cleanup task.
pub type SharedCache = Arc<RwLock<CacheStore>>;

// == Public Constants ==
/// Default number of addresses held at once
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default entry lifetime in seconds
pub const DEFAULT_TTL_SECS: u64 = 300;
