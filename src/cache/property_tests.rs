//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the capacity bound, TTL expiry, LRU order and
//! statistics of the result cache.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::models::AccountInfo;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_TTL: u64 = 300;

// == Strategies ==
/// Generates Tron-shaped address keys
fn address_strategy() -> impl Strategy<Value = String> {
    "T[1-9A-HJ-NP-Za-km-z]{33}"
}

/// Generates account snapshots with non-negative resources
fn account_strategy() -> impl Strategy<Value = AccountInfo> {
    (0i64..1_000_000, 0i64..1_000_000, 0i64..10_000_000_000)
        .prop_map(|(bandwidth, energy, sun)| AccountInfo::new(bandwidth, energy, Decimal::new(sun, 6)))
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { address: String, info: AccountInfo },
    Get { address: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // Small key space so gets actually hit
    let address = prop::sample::select(vec![
        "TFjnjGvy8GLP63CDkX2eWQBYHRUzvN619g".to_string(),
        "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".to_string(),
        "TLa2f6VPqDgRE67v1736s7bJ8Ray5wYjU7".to_string(),
        "TXLAQ63Xg1NAzckPwKHvzw7CSEmLMEqcdj".to_string(),
    ]);
    prop_oneof![
        (address.clone(), account_strategy())
            .prop_map(|(address, info)| CacheOp::Set { address, info }),
        address.prop_map(|address| CacheOp::Get { address }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Whatever was set last for an address is what a get returns
    #[test]
    fn prop_get_returns_latest_set(
        address in address_strategy(),
        first in account_strategy(),
        second in account_strategy()
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_TTL);

        store.set(address.clone(), first);
        store.set(address.clone(), second.clone());

        prop_assert_eq!(store.get(&address), Some(second));
        prop_assert_eq!(store.len(), 1);
    }

    // The cache never holds more addresses than its capacity
    #[test]
    fn prop_capacity_enforcement(
        entries in prop::collection::vec((address_strategy(), account_strategy()), 1..300)
    ) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_TTL);

        for (address, info) in entries {
            store.set(address, info);
            prop_assert!(
                store.len() <= TEST_MAX_ENTRIES,
                "Cache size {} exceeds max {}",
                store.len(),
                TEST_MAX_ENTRIES
            );
        }
    }

    // Filling past capacity evicts the least recently used address
    #[test]
    fn prop_lru_eviction_order(
        addresses in prop::collection::hash_set(address_strategy(), 2..10),
        new_address in address_strategy(),
        info in account_strategy()
    ) {
        let addresses: Vec<String> = addresses.into_iter().collect();
        prop_assume!(!addresses.contains(&new_address));

        let capacity = addresses.len();
        let mut store = CacheStore::new(capacity, TEST_TTL);
        for address in &addresses {
            store.set(address.clone(), info.clone());
        }

        store.set(new_address.clone(), info.clone());

        prop_assert_eq!(store.len(), capacity);
        prop_assert!(store.get(&addresses[0]).is_none());
        prop_assert!(store.get(&new_address).is_some());
        for address in addresses.iter().skip(1) {
            prop_assert!(store.get(address).is_some(), "{} should survive", address);
        }
    }

    // A read makes the address the last eviction candidate
    #[test]
    fn prop_lru_access_tracking(
        addresses in prop::collection::hash_set(address_strategy(), 3..8),
        new_address in address_strategy(),
        info in account_strategy()
    ) {
        let addresses: Vec<String> = addresses.into_iter().collect();
        prop_assume!(!addresses.contains(&new_address));

        let mut store = CacheStore::new(addresses.len(), TEST_TTL);
        for address in &addresses {
            store.set(address.clone(), info.clone());
        }

        // Oldest becomes most recent, second oldest is now the victim
        prop_assert!(store.get(&addresses[0]).is_some());
        store.set(new_address, info);

        prop_assert!(store.get(&addresses[0]).is_some());
        prop_assert!(store.get(&addresses[1]).is_none());
    }

    // Hit and miss counters match a simple model of the operations
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, TEST_TTL);
        let mut present: HashSet<String> = HashSet::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Set { address, info } => {
                    store.set(address.clone(), info);
                    present.insert(address);
                }
                CacheOp::Get { address } => {
                    let found = store.get(&address).is_some();
                    prop_assert_eq!(found, present.contains(&address));
                    if found {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.evictions, 0);
        prop_assert_eq!(stats.total_entries, present.len());
    }
}

// Fewer cases for the time-sensitive TTL property
proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    // An entry is gone once its TTL has elapsed
    #[test]
    fn prop_ttl_expiration_behavior(address in address_strategy(), info in account_strategy()) {
        let mut store = CacheStore::new(TEST_MAX_ENTRIES, 1);

        store.set(address.clone(), info.clone());
        prop_assert_eq!(store.get(&address), Some(info));

        sleep(Duration::from_millis(1100));

        prop_assert!(store.get(&address).is_none());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(30))]

    // Concurrent readers and writers through the shared lock never corrupt the store
    #[test]
    fn prop_concurrent_operation_correctness(
        operations in prop::collection::vec(cache_op_strategy(), 10..50)
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();

        let written: HashSet<(String, AccountInfo)> = operations
            .iter()
            .filter_map(|op| match op {
                CacheOp::Set { address, info } => Some((address.clone(), info.clone())),
                CacheOp::Get { .. } => None,
            })
            .collect();

        let result: Result<(), String> = rt.block_on(async {
            let store = Arc::new(RwLock::new(CacheStore::new(2, TEST_TTL)));
            let mut handles = vec![];

            for op in operations {
                let store = Arc::clone(&store);
                handles.push(tokio::spawn(async move {
                    let mut cache = store.write().await;
                    match op {
                        CacheOp::Set { address, info } => {
                            cache.set(address, info);
                            None
                        }
                        CacheOp::Get { address } => cache.get(&address).map(|info| (address, info)),
                    }
                }));
            }

            for handle in handles {
                let read = handle.await.map_err(|e| e.to_string())?;
                // Any value read must be one that some writer stored for that address
                if let Some(pair) = read {
                    if !written.contains(&pair) {
                        return Err(format!("read unknown snapshot {:?}", pair));
                    }
                }
            }

            let cache = store.read().await;
            if cache.len() > 2 {
                return Err(format!("capacity exceeded: {}", cache.len()));
            }
            Ok::<(), String>(())
        });

        prop_assert!(result.is_ok(), "{:?}", result);
    }
}
