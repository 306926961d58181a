//! Response DTOs for the host API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::facade::{FacadeOptions, FacadeStats};

/// Response body for GET /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key, before namespacing
    pub key: String,
    /// The namespaced key the provider was asked for
    pub cache_key: String,
    /// The content, tag included when requested
    pub content: String,
}

impl GetResponse {
    pub fn new(
        key: impl Into<String>,
        cache_key: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            cache_key: cache_key.into(),
            content: content.into(),
        }
    }
}

/// Response body for PUT /cache
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Outcome message
    pub message: String,
    /// The key that was written, before namespacing
    pub key: String,
    /// Whether the provider kept the entry
    pub stored: bool,
}

impl SetResponse {
    pub fn new(key: impl Into<String>, stored: bool) -> Self {
        let key = key.into();
        let message = if stored {
            format!("Key '{}' cached successfully", key)
        } else {
            format!("Key '{}' was not cached", key)
        };
        Self {
            message,
            key,
            stored,
        }
    }
}

/// Response body for DELETE /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub key: String,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for DELETE /cache and DELETE /namespace
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
    /// Entries removed, when the provider reports a count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<usize>,
}

impl ClearResponse {
    /// Response for a flush of the whole provider
    pub fn flushed() -> Self {
        Self {
            message: "Cache flushed".to_string(),
            removed: None,
        }
    }

    /// Response for a namespace-scoped clear
    pub fn namespace(namespace: &str, removed: usize) -> Self {
        Self {
            message: format!("Cleared namespace '{}'", namespace),
            removed: Some(removed),
        }
    }
}

/// Response body for the settings endpoints
#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    pub key_prefix: String,
    pub cache_tag: String,
    pub cache_disabled: bool,
}

impl SettingsResponse {
    pub fn new(options: FacadeOptions, cache_disabled: bool) -> Self {
        Self {
            key_prefix: options.key_prefix,
            cache_tag: options.cache_tag,
            cache_disabled,
        }
    }
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub disabled: u64,
    pub writes: u64,
    pub flushes: u64,
    /// Current number of entries in the provider
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from facade statistics
    pub fn new(stats: &FacadeStats, total_entries: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            disabled: stats.disabled,
            writes: stats.writes,
            flushes: stats.flushes,
            total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
