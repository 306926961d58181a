//! Cache Key Module
//!
//! Builds namespaced keys as `prefix + "-" + suffix`.
//!
//! The separator is never escaped, so `("a-b", "c")` and `("a", "b-c")` map to
//! the same key. Callers choosing prefixes must keep that in mind.

use std::fmt;

use serde::Serialize;

/// Joins a prefix and a suffix into a namespaced key
pub const KEY_SEPARATOR: &str = "-";

/// Concatenates `prefix`, the separator and `suffix`.
pub fn build_cache_key(prefix: &str, suffix: &str) -> String {
    let mut key = String::with_capacity(prefix.len() + KEY_SEPARATOR.len() + suffix.len());
    key.push_str(prefix);
    key.push_str(KEY_SEPARATOR);
    key.push_str(suffix);
    key
}

// == Cache Key ==
/// A fully namespaced key as handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(prefix: &str, suffix: &str) -> Self {
        Self(build_cache_key(prefix, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
