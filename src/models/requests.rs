//! Request DTOs for the host API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::facade::FOREVER_MINUTES;

fn forever_minutes() -> i64 {
    FOREVER_MINUTES
}

fn default_true() -> bool {
    true
}

/// Request body for PUT /cache
///
/// # Fields
/// - `key`: Key to store under, before namespacing
/// - `content`: Content to store
/// - `minutes`: Minutes to live, `-1` (the default) stores forever
#[derive(Debug, Clone, Deserialize)]
pub struct SetCacheRequest {
    pub key: String,
    pub content: String,
    #[serde(default = "forever_minutes")]
    pub minutes: i64,
}

impl SetCacheRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Query string for GET /cache/:key
#[derive(Debug, Clone, Deserialize)]
pub struct GetCacheQuery {
    /// Append the cache tag to the returned content
    #[serde(default = "default_true")]
    pub tag: bool,
}

impl Default for GetCacheQuery {
    fn default() -> Self {
        Self { tag: true }
    }
}

/// Request body for PUT /settings/prefix and PUT /settings/tag
#[derive(Debug, Clone, Deserialize)]
pub struct SettingValueRequest {
    pub value: String,
}

/// Request body for PUT /settings/disabled
#[derive(Debug, Clone, Deserialize)]
pub struct DisabledRequest {
    pub disabled: bool,
}
