//! Facade Options Module
//!
//! Prefix and tag settings read by each facade operation.

use serde::Serialize;

use super::{CacheKey, DEFAULT_CACHE_TAG, DEFAULT_KEY_PREFIX, KEY_SEPARATOR};

// == Facade Options ==
/// Current namespace prefix and tag marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacadeOptions {
    /// Prefix for every namespaced key
    pub key_prefix: String,
    /// Marker appended to tagged reads
    pub cache_tag: String,
}

impl FacadeOptions {
    pub fn new(key_prefix: impl Into<String>, cache_tag: impl Into<String>) -> Self {
        Self {
            key_prefix: key_prefix.into(),
            cache_tag: cache_tag.into(),
        }
    }

    /// Builds the namespaced key for `suffix` under the current prefix.
    pub fn cache_key(&self, suffix: &str) -> CacheKey {
        CacheKey::new(&self.key_prefix, suffix)
    }

    /// Leading part shared by every key in this namespace.
    pub fn namespace(&self) -> String {
        format!("{}{}", self.key_prefix, KEY_SEPARATOR)
    }
}

impl Default for FacadeOptions {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX, DEFAULT_CACHE_TAG)
    }
}
