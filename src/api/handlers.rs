//! API Handlers
//!
//! HTTP request handlers for each lookup service endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::{CacheStore, SharedCache};
use crate::config::Config;
use crate::error::{LookupError, Result};
use crate::ledger::{LedgerApi, TronGridClient};
use crate::lookup::{AccountFetcher, AddressValidator, LedgerFetcher, LedgerValidator, LookupService};
use crate::models::{
    AddressRequest, HealthResponse, HistoryQuery, HistoryResponse, LookupResponse, StatsResponse,
};
use crate::retry::RetryPolicy;
use crate::storage::{LookupStore, SqliteStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lookup pipeline with its cache and store
    pub lookup: Arc<LookupService>,
}

impl AppState {
    /// Creates a new AppState around an assembled pipeline.
    pub fn new(lookup: LookupService) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    /// Assembles the pipeline from its parts, sharing one cache.
    pub fn from_parts(
        validator: Arc<dyn AddressValidator>,
        fetcher: Arc<dyn AccountFetcher>,
        cache: CacheStore,
        store: Arc<dyn LookupStore>,
    ) -> Self {
        let cache: SharedCache = Arc::new(RwLock::new(cache));
        Self::new(LookupService::new(validator, fetcher, cache, store))
    }

    /// Builds the production pipeline: TronGrid client, SQLite store, default retry policy.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let ledger: Arc<dyn LedgerApi> = Arc::new(TronGridClient::new(
            &config.trongrid_api_url,
            config.trongrid_api_key.clone(),
        )?);
        let retry = RetryPolicy::default();

        let validator: Arc<dyn AddressValidator> =
            Arc::new(LedgerValidator::new(ledger.clone(), retry.clone()));
        let fetcher = Arc::new(LedgerFetcher::new(ledger, validator.clone(), retry));
        let store = Arc::new(SqliteStore::connect(&config.database_url).await?);
        let cache = CacheStore::new(config.cache_max_entries, config.cache_ttl);

        Ok(Self::from_parts(validator, fetcher, cache, store))
    }

    /// The result cache, for background maintenance.
    pub fn cache(&self) -> SharedCache {
        self.lookup.cache().clone()
    }
}

/// Handler for POST /address_info
pub async fn address_info_handler(
    State(state): State<AppState>,
    Json(req): Json<AddressRequest>,
) -> Result<Json<LookupResponse>> {
    let response = state.lookup.handle_lookup(&req.address).await?;
    Ok(Json(response))
}

/// Handler for GET /recent_requests
pub async fn recent_requests_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>> {
    // Unparseable parameters get the same JSON error as out-of-range ones
    let Query(query) = query.map_err(|rejection| LookupError::InvalidQuery(rejection.body_text()))?;
    let page = state.lookup.list_recent(&query).await?;
    Ok(Json(page))
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.lookup.cache().read().await.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
