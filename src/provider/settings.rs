//! Runtime Settings Module
//!
//! Mutable host settings consulted by the facade on every read.

use std::sync::atomic::{AtomicBool, Ordering};

use super::SettingsProvider;

/// Name of the boolean setting that switches off all cache reads.
pub const CACHE_DISABLED_SETTING: &str = "app.cacheDisabled";

// == Runtime Settings ==
/// Settings collaborator holding the cache kill switch.
#[derive(Debug, Default)]
pub struct RuntimeSettings {
    cache_disabled: AtomicBool,
}

impl RuntimeSettings {
    pub fn new(cache_disabled: bool) -> Self {
        Self {
            cache_disabled: AtomicBool::new(cache_disabled),
        }
    }

    /// Turns cache reads off (`true`) or back on (`false`).
    pub fn set_cache_disabled(&self, disabled: bool) {
        self.cache_disabled.store(disabled, Ordering::SeqCst);
    }

    pub fn is_cache_disabled(&self) -> bool {
        self.cache_disabled.load(Ordering::SeqCst)
    }
}

impl SettingsProvider for RuntimeSettings {
    fn get(&self, setting: &str) -> Option<bool> {
        (setting == CACHE_DISABLED_SETTING).then(|| self.is_cache_disabled())
    }
}
