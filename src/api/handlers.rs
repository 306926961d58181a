//! API Handlers
//!
//! HTTP request handlers exposing the cache facade to a host.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::facade::{FacadeOptions, KeyedCacheFacade, Lookup};
use crate::models::{
    ClearResponse, DeleteResponse, DisabledRequest, GetCacheQuery, GetResponse, HealthResponse,
    SetCacheRequest, SetResponse, SettingValueRequest, SettingsResponse, StatsResponse,
};
use crate::provider::{MemoryProvider, RuntimeSettings};

/// Application state shared across all handlers.
///
/// The facade holds the same provider and settings as trait objects; the
/// concrete handles are kept for purging, entry counts and the kill switch.
#[derive(Clone)]
pub struct AppState {
    pub facade: KeyedCacheFacade,
    pub provider: Arc<MemoryProvider>,
    pub settings: Arc<RuntimeSettings>,
}

impl AppState {
    /// Creates a new AppState wiring a facade over the given collaborators.
    pub fn new(
        provider: Arc<MemoryProvider>,
        settings: Arc<RuntimeSettings>,
        options: FacadeOptions,
    ) -> Self {
        let facade = KeyedCacheFacade::with_options(provider.clone(), settings.clone(), options);
        Self {
            facade,
            provider,
            settings,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(MemoryProvider::new()),
            Arc::new(RuntimeSettings::new(config.cache_disabled)),
            FacadeOptions::new(config.key_prefix.clone(), config.cache_tag.clone()),
        )
    }

    fn settings_response(&self) -> SettingsResponse {
        SettingsResponse::new(self.facade.options(), self.settings.is_cache_disabled())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(MemoryProvider::new()),
            Arc::new(RuntimeSettings::default()),
            FacadeOptions::default(),
        )
    }
}

/// Handler for PUT /cache
///
/// Stores content under a namespaced key; `minutes` of -1 stores forever.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetCacheRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let stored = state.facade.set_cache(&req.key, req.content, req.minutes)?;

    Ok(Json(SetResponse::new(req.key, stored)))
}

/// Handler for GET /cache/:key
///
/// Returns 404 when the entry is absent and 503 while caching is disabled.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<GetCacheQuery>,
) -> Result<Json<GetResponse>> {
    let (cache_key, lookup) = state.facade.lookup(&key, query.tag)?;

    match lookup {
        Lookup::Found(content) => Ok(Json(GetResponse::new(
            key,
            cache_key.into_string(),
            content,
        ))),
        Lookup::Absent => Err(CacheError::NotFound(cache_key.into_string())),
        Lookup::Disabled => Err(CacheError::Disabled(cache_key.into_string())),
    }
}

/// Handler for DELETE /cache/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if state.facade.forget_cached(&key)? {
        Ok(Json(DeleteResponse::new(key)))
    } else {
        Err(CacheError::NotFound(state.facade.cache_key(&key).into_string()))
    }
}

/// Handler for DELETE /cache
///
/// Flushes the entire provider, not just this namespace.
pub async fn flush_handler(State(state): State<AppState>) -> Result<Json<ClearResponse>> {
    if !state.facade.clear_cache()? {
        return Err(CacheError::Provider("cache provider did not flush".to_string()));
    }
    Ok(Json(ClearResponse::flushed()))
}

/// Handler for DELETE /namespace
pub async fn clear_namespace_handler(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>> {
    let namespace = state.facade.options().namespace();
    let removed = state.facade.clear_namespace()?;
    Ok(Json(ClearResponse::namespace(&namespace, removed)))
}

/// Handler for GET /settings
pub async fn settings_handler(State(state): State<AppState>) -> Json<SettingsResponse> {
    Json(state.settings_response())
}

/// Handler for PUT /settings/prefix
pub async fn set_prefix_handler(
    State(state): State<AppState>,
    Json(req): Json<SettingValueRequest>,
) -> Json<SettingsResponse> {
    state.facade.set_cache_key_prefix(req.value);
    Json(state.settings_response())
}

/// Handler for PUT /settings/tag
pub async fn set_tag_handler(
    State(state): State<AppState>,
    Json(req): Json<SettingValueRequest>,
) -> Json<SettingsResponse> {
    state.facade.set_cache_tag(req.value);
    Json(state.settings_response())
}

/// Handler for PUT /settings/disabled
pub async fn set_disabled_handler(
    State(state): State<AppState>,
    Json(req): Json<DisabledRequest>,
) -> Json<SettingsResponse> {
    state.settings.set_cache_disabled(req.disabled);
    Json(state.settings_response())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.facade.stats_snapshot();
    Json(StatsResponse::new(&stats, state.provider.len()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
