//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Redirect,
    Json,
};
use tracing::debug;

use crate::cache::{CacheStore, SharedCache};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, KvQuery, KvResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the single process-wide cache handle.
#[derive(Clone)]
pub struct AppState {
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState owning the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: SharedCache::new(cache),
        }
    }

    /// Creates a new AppState from configuration, using the system clock.
    pub fn from_config(config: &Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    /// Creates a new AppState from configuration with an explicit clock.
    pub fn with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self::new(CacheStore::with_clock(
            config.max_entries,
            config.ttl(),
            clock,
        ))
    }
}

/// Handler for GET /crappykv?key=..[&value=..]
///
/// Stores `value` under `key` when present, otherwise reads `key`.
/// Responds with the key and its current value, `null` if absent.
/// An undecodable query string is reported as a JSON error like any other.
pub async fn kv_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<KvQuery>, QueryRejection>,
) -> Result<Json<KvResponse>> {
    let Query(query) = query?;
    let (key, value) = query.into_parts()?;
    let is_write = value.is_some();

    let current = state.cache.read_or_write(&key, value);
    debug!(key = %key, write = is_write, hit = current.is_some(), "crappykv request");

    Ok(Json(KvResponse::new(key, current)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /startup
///
/// Startup probe; answers as soon as the router is serving.
pub async fn startup_handler() -> &'static str {
    "OK"
}

/// Dashboard the service exists to feed
pub const DASHBOARD_URL: &str = "https://play.grafana.org/d/bedn3ke4t1uyoa/";

/// Handler for GET /redirect
pub async fn redirect_handler() -> Redirect {
    Redirect::temporary(DASHBOARD_URL)
}

/// Fallback for unknown routes.
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound
}
