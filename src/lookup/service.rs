//! Lookup orchestration
//!
//! Ties validator, cache, fetcher and history store together for one request.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::cache::SharedCache;
use crate::error::{LookupError, Result};
use crate::lookup::{AccountFetcher, AddressValidator};
use crate::models::{AccountInfo, HistoryQuery, HistoryResponse, LookupResponse};
use crate::storage::LookupStore;

/// Per-request pipeline over explicitly injected collaborators.
///
/// Concurrent lookups for the same address may both miss the cache and both
/// go upstream; there is no per-address fetch lock.
pub struct LookupService {
    validator: Arc<dyn AddressValidator>,
    fetcher: Arc<dyn AccountFetcher>,
    cache: SharedCache,
    store: Arc<dyn LookupStore>,
}

impl LookupService {
    pub fn new(
        validator: Arc<dyn AddressValidator>,
        fetcher: Arc<dyn AccountFetcher>,
        cache: SharedCache,
        store: Arc<dyn LookupStore>,
    ) -> Self {
        Self {
            validator,
            fetcher,
            cache,
            store,
        }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == Lookup ==
    /// Validates `address`, serves it from cache or upstream, and records the lookup.
    ///
    /// Nothing is persisted when any step fails. A cache write is not undone
    /// if the following insert fails.
    pub async fn handle_lookup(&self, address: &str) -> Result<LookupResponse> {
        let result = self.lookup(address).await;

        match &result {
            Err(err @ LookupError::InvalidAddress(_)) => {
                warn!(%address, error = %err, "Rejected lookup");
            }
            Err(LookupError::Network(msg)) => {
                error!(%address, error = %msg, "Network error during lookup");
            }
            Err(err) => {
                error!(%address, error = %err, "Error processing address");
            }
            Ok(_) => {}
        }

        result
    }

    async fn lookup(&self, address: &str) -> Result<LookupResponse> {
        if !self.validator.validate(address).await? {
            return Err(LookupError::InvalidAddress(address.to_string()));
        }

        let info = self.cached_or_fetch(address).await?;
        let record = self.store.insert(address, &info).await?;
        info!(%address, record_id = record.id, "Lookup recorded");

        Ok(LookupResponse::new(address, info))
    }

    async fn cached_or_fetch(&self, address: &str) -> Result<AccountInfo> {
        // Lock is released before going upstream
        let cached = self.cache.write().await.get(address);
        if let Some(info) = cached {
            info!(%address, "Cache hit for address");
            return Ok(info);
        }

        let info = self.fetcher.fetch_account_info(address).await?;
        self.cache
            .write()
            .await
            .set(address.to_string(), info.clone());
        info!(%address, "Cache updated for address");

        Ok(info)
    }

    // == History ==
    /// Returns one page of the lookup history, newest first.
    pub async fn list_recent(&self, query: &HistoryQuery) -> Result<HistoryResponse> {
        if let Some(reason) = query.validate() {
            return Err(LookupError::InvalidQuery(reason));
        }

        let page = async {
            let total = self.store.count().await?;
            let data = self
                .store
                .list_recent(query.offset(), query.page_size)
                .await?;
            Ok::<_, sqlx::Error>((total, data))
        }
        .await;

        match page {
            Ok((total, data)) => {
                info!(
                    page = query.page,
                    page_size = query.page_size,
                    "Retrieved recent requests"
                );
                Ok(HistoryResponse {
                    total,
                    page: query.page,
                    page_size: query.page_size,
                    data,
                })
            }
            Err(err) => {
                error!(error = %err, "Error retrieving recent requests");
                Err(err.into())
            }
        }
    }
}
