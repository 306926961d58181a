//! Configuration Module
//!
//! Handles loading facade and host settings from environment variables.

use std::env;

use crate::facade::{DEFAULT_CACHE_TAG, DEFAULT_KEY_PREFIX};

/// Facade and host configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix used to namespace every cache key
    pub key_prefix: String,
    /// Marker appended to tagged reads
    pub cache_tag: String,
    /// Initial value of the `app.cacheDisabled` setting
    pub cache_disabled: bool,
    /// HTTP server port
    pub server_port: u16,
    /// Interval in seconds between purges of expired provider entries
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_KEY_PREFIX` - Key namespace prefix (default: `simple-cache-`)
    /// - `CACHE_TAG` - Marker appended to tagged reads (default: `<!-- cache -->`)
    /// - `CACHE_DISABLED` - `true` or `1` disables reads (default: false)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Purge frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            key_prefix: env::var("CACHE_KEY_PREFIX").unwrap_or(defaults.key_prefix),
            cache_tag: env::var("CACHE_TAG").unwrap_or(defaults.cache_tag),
            cache_disabled: env::var("CACHE_DISABLED")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.cache_disabled),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cleanup_interval),
        }
    }
}

/// Interprets common truthy spellings of a boolean environment value.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            cache_tag: DEFAULT_CACHE_TAG.to_string(),
            cache_disabled: false,
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}
