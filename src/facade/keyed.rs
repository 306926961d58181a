//! Keyed Cache Facade Module
//!
//! Translates simple key/value calls into namespaced provider calls.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::facade::{CacheKey, FacadeOptions, FacadeStats, Lifetime, Lookup};
use crate::provider::{CacheProvider, SettingsProvider, CACHE_DISABLED_SETTING};

// == Keyed Cache Facade ==
/// Namespacing wrapper around a cache provider.
///
/// Clones share the same provider, settings, options and counters, so a
/// prefix or tag change made through one clone is seen by all of them.
/// Independently created facades do not share options.
#[derive(Clone)]
pub struct KeyedCacheFacade {
    provider: Arc<dyn CacheProvider>,
    settings: Arc<dyn SettingsProvider>,
    options: Arc<RwLock<FacadeOptions>>,
    stats: Arc<Mutex<FacadeStats>>,
}

impl KeyedCacheFacade {
    // == Constructors ==
    /// Creates a facade with the default prefix and tag.
    pub fn new(provider: Arc<dyn CacheProvider>, settings: Arc<dyn SettingsProvider>) -> Self {
        Self::with_options(provider, settings, FacadeOptions::default())
    }

    pub fn with_options(
        provider: Arc<dyn CacheProvider>,
        settings: Arc<dyn SettingsProvider>,
        options: FacadeOptions,
    ) -> Self {
        Self {
            provider,
            settings,
            options: Arc::new(RwLock::new(options)),
            stats: Arc::new(Mutex::new(FacadeStats::new())),
        }
    }

    // == Get Cached ==
    /// Reads the content stored under the namespaced `key`.
    ///
    /// Returns [`Lookup::Disabled`] without touching the provider when the
    /// `app.cacheDisabled` setting is on. When `tag_content` is true the
    /// current tag is appended to found content.
    pub fn get_cached(&self, key: &str, tag_content: bool) -> Result<Lookup> {
        self.lookup(key, tag_content).map(|(_, lookup)| lookup)
    }

    /// Like [`get_cached`](KeyedCacheFacade::get_cached), also returning the
    /// namespaced key that was actually read.
    pub fn lookup(&self, key: &str, tag_content: bool) -> Result<(CacheKey, Lookup)> {
        let options = self.options();
        let cache_key = options.cache_key(key);

        if self.is_disabled() {
            debug!(key = %cache_key, "cache read skipped, caching disabled");
            self.stats().record_disabled();
            return Ok((cache_key, Lookup::Disabled));
        }

        if !self.provider.has(cache_key.as_str())? {
            debug!(key = %cache_key, "cache miss");
            self.stats().record_miss();
            return Ok((cache_key, Lookup::Absent));
        }

        // The entry may expire between `has` and `get`.
        let Some(mut content) = self.provider.get(cache_key.as_str())? else {
            debug!(key = %cache_key, "cache miss");
            self.stats().record_miss();
            return Ok((cache_key, Lookup::Absent));
        };

        if tag_content {
            content.push_str(&options.cache_tag);
        }
        debug!(key = %cache_key, tagged = tag_content, "cache hit");
        self.stats().record_hit();
        Ok((cache_key, Lookup::Found(content)))
    }

    // == Set Cache ==
    /// Stores `content` under the namespaced `key`.
    ///
    /// Accepts a [`Lifetime`] or a raw minutes value where `-1` means forever.
    /// Returns the provider's success flag.
    pub fn set_cache(
        &self,
        key: &str,
        content: impl Into<String>,
        lifetime: impl Into<Lifetime>,
    ) -> Result<bool> {
        let cache_key = self.cache_key(key);
        let lifetime = lifetime.into();

        let stored = match lifetime {
            Lifetime::Forever => self.provider.forever(cache_key.as_str(), content.into())?,
            Lifetime::Minutes(minutes) => {
                self.provider
                    .put(cache_key.as_str(), content.into(), minutes)?
            }
        };

        debug!(key = %cache_key, ?lifetime, stored, "cache write");
        if stored {
            self.stats().record_write();
        }
        Ok(stored)
    }

    // == Forget Cached ==
    /// Removes the entry under the namespaced `key`.
    pub fn forget_cached(&self, key: &str) -> Result<bool> {
        let cache_key = self.cache_key(key);
        let removed = self.provider.forget(cache_key.as_str())?;
        debug!(key = %cache_key, removed, "cache forget");
        Ok(removed)
    }

    // == Setters ==
    /// Replaces the key prefix for all later operations.
    ///
    /// Entries stored under the old prefix stay in the provider but can no
    /// longer be reached through this facade.
    pub fn set_cache_key_prefix(&self, new_prefix: impl Into<String>) {
        let new_prefix = new_prefix.into();
        info!(prefix = %new_prefix, "cache key prefix changed");
        self.options_mut(|options| options.key_prefix = new_prefix);
    }

    /// Replaces the marker appended to tagged reads.
    pub fn set_cache_tag(&self, new_tag: impl Into<String>) {
        let new_tag = new_tag.into();
        info!(tag = %new_tag, "cache tag changed");
        self.options_mut(|options| options.cache_tag = new_tag);
    }

    // == Clear ==
    /// Flushes the whole provider.
    ///
    /// This is not scoped to the namespace: entries written by anything else
    /// sharing the provider are removed too. Use [`clear_namespace`] to drop
    /// only this facade's entries.
    ///
    /// Returns the provider's success flag; only successful flushes are counted.
    ///
    /// [`clear_namespace`]: KeyedCacheFacade::clear_namespace
    pub fn clear_cache(&self) -> Result<bool> {
        warn!("flushing entire cache provider");
        let flushed = self.provider.flush()?;
        if flushed {
            self.stats().record_flush();
        } else {
            warn!("cache provider reported an unsuccessful flush");
        }
        Ok(flushed)
    }

    /// Removes every entry under the current prefix.
    ///
    /// Returns the number of entries removed. Because the separator is not
    /// escaped, this also removes keys of any prefix that extends the current
    /// one with a separator.
    pub fn clear_namespace(&self) -> Result<usize> {
        let namespace = self.options().namespace();
        let removed = self.provider.forget_prefix(&namespace)?;
        info!(namespace = %namespace, removed, "cleared cache namespace");
        Ok(removed)
    }

    // == Accessors ==
    /// Namespaced key for `suffix` under the current prefix.
    pub fn cache_key(&self, suffix: &str) -> CacheKey {
        self.options().cache_key(suffix)
    }

    /// Snapshot of the current prefix and tag.
    pub fn options(&self) -> FacadeOptions {
        self.options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of the operation counters.
    pub fn stats_snapshot(&self) -> FacadeStats {
        self.stats().clone()
    }

    /// True when the host setting switches reads off.
    pub fn is_disabled(&self) -> bool {
        self.settings.get(CACHE_DISABLED_SETTING).unwrap_or(false)
    }

    fn options_mut(&self, update: impl FnOnce(&mut FacadeOptions)) {
        let mut options = self.options.write().unwrap_or_else(PoisonError::into_inner);
        update(&mut options);
    }

    fn stats(&self) -> MutexGuard<'_, FacadeStats> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for KeyedCacheFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedCacheFacade")
            .field("options", &self.options())
            .field("disabled", &self.is_disabled())
            .finish_non_exhaustive()
    }
}
