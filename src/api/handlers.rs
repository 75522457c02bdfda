//! API Handlers
//!
//! HTTP request handlers for each wireframe cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::TieredCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{GetResponse, HealthResponse, PutRequest, PutResponse, StatsResponse};
use crate::repository::WireframeRepository;

/// Application state shared across all handlers.
///
/// Wires the shared tiered store into the repository, the Rust counterpart of
/// the original host's dependency-injection component.
#[derive(Clone)]
pub struct AppState {
    /// Namespaced repository facade used by the key endpoints
    pub repository: WireframeRepository,
    /// Shared store handle, kept for the stats endpoint
    pub cache: Arc<TieredCache>,
}

impl AppState {
    /// Creates a new AppState over the given tiered store.
    pub fn new(cache: TieredCache) -> Self {
        let cache = Arc::new(cache);
        Self {
            repository: WireframeRepository::new(cache.clone()),
            cache,
        }
    }

    /// Opens the tiered store from configuration and wires the state.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let cache = TieredCache::open(&config.cache_dir, config.max_memory_entries).await?;
        Ok(Self::new(cache))
    }
}

/// Handler for GET /wireframe/:key
///
/// Retrieves a cached value by key; a miss maps to 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.repository.get(&key).await?;
    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for PUT /wireframe/:key
///
/// Caches the supplied value under the key; a null value maps to 400.
pub async fn put_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    state.repository.put(&key, req.value).await?;
    Ok(Json(PutResponse::new(key)))
}

/// Handler for GET /stats
///
/// Returns tier hit/miss/eviction counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
///
/// Returns service health status.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
