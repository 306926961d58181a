//! Memory Provider Module
//!
//! In-process cache provider backed by a HashMap with minute-granularity TTL.
//! There is no capacity limit and no eviction; expired entries are hidden on
//! read and removed by [`MemoryProvider::purge_expired`].

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::provider::{CacheProvider, StoredEntry};

// == Memory Provider ==
/// Thread-safe in-memory cache provider.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    /// Key-value storage
    entries: RwLock<HashMap<String, StoredEntry>>,
}

impl MemoryProvider {
    // == Constructor ==
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, StoredEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, StoredEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    // == Purge Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    // == Is Empty ==
    /// Returns true if the provider holds no entries.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Stores an entry whose expiry has already passed.
    #[cfg(test)]
    pub(crate) fn insert_expired(&self, key: &str, value: &str) {
        let entry = StoredEntry {
            value: value.to_string(),
            expires_at: Some(Utc::now() - chrono::Duration::seconds(1)),
        };
        self.write().insert(key.to_string(), entry);
    }

    fn live_value(&self, key: &str) -> Option<String> {
        self.read()
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }
}

impl CacheProvider for MemoryProvider {
    fn has(&self, key: &str) -> Result<bool> {
        Ok(self.read().get(key).is_some_and(|entry| !entry.is_expired()))
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.live_value(key))
    }

    fn put(&self, key: &str, value: String, minutes: u64) -> Result<bool> {
        if minutes == 0 {
            debug!(%key, "zero ttl, dropping entry instead of storing");
            self.write().remove(key);
            return Ok(false);
        }

        self.write()
            .insert(key.to_string(), StoredEntry::for_minutes(value, minutes));
        Ok(true)
    }

    fn forever(&self, key: &str, value: String) -> Result<bool> {
        self.write()
            .insert(key.to_string(), StoredEntry::forever(value));
        Ok(true)
    }

    fn forget(&self, key: &str) -> Result<bool> {
        Ok(self.write().remove(key).is_some())
    }

    fn forget_prefix(&self, prefix: &str) -> Result<usize> {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        Ok(before - entries.len())
    }

    fn flush(&self) -> Result<bool> {
        self.write().clear();
        Ok(true)
    }
}
