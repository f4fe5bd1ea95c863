//! Cache Store Module
//!
//! Address-keyed snapshot cache combining HashMap storage with LRU tracking and TTL expiration.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::models::AccountInfo;

// == Cache Store ==
/// Result cache with LRU eviction and a fixed TTL per entry.
///
/// Failed lookups are never stored; only successful snapshots reach [`CacheStore::set`].
#[derive(Debug)]
pub struct CacheStore {
    /// Address -> snapshot
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// TTL in seconds applied to every entry
    ttl: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with specified capacity and TTL.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of addresses the cache can hold
    /// * `ttl` - Entry lifetime in seconds
    pub fn new(max_entries: usize, ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl,
        }
    }

    // == Set ==
    /// Stores a snapshot for `address`, resetting its TTL.
    ///
    /// If the cache is at capacity, expired entries are purged first and then
    /// the least recently used entry is evicted.
    pub fn set(&mut self, address: String, value: AccountInfo) {
        if self.max_entries == 0 {
            return;
        }

        let is_overwrite = self.entries.contains_key(&address);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            self.cleanup_expired();
        }
        while !is_overwrite && self.entries.len() >= self.max_entries {
            match self.lru.evict_oldest() {
                Some(evicted) => {
                    self.entries.remove(&evicted);
                    self.stats.record_eviction();
                }
                None => break,
            }
        }

        self.entries
            .insert(address.clone(), CacheEntry::new(value, self.ttl));
        self.lru.touch(&address);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the snapshot for `address` if present and not expired.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, address: &str) -> Option<AccountInfo> {
        let expired = match self.entries.get(address) {
            Some(entry) => entry.is_expired(),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(address);
            self.lru.remove(address);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.lru.touch(address);
        self.entries.get(address).map(|entry| entry.value.clone())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(address, _)| address.clone())
            .collect();

        for address in &expired {
            self.entries.remove(address);
            self.lru.remove(address);
        }

        self.stats.record_expirations(expired.len());
        self.stats.set_total_entries(self.entries.len());
        expired.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// TTL in seconds.
    pub fn ttl(&self) -> u64 {
        self.ttl
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(crate::cache::DEFAULT_MAX_ENTRIES, crate::cache::DEFAULT_TTL_SECS)
    }
}
