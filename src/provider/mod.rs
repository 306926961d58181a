//! Provider Module
//!
//! Collaborator contracts the facade delegates to, plus in-process
//! implementations of both.
//!
//! The facade never stores anything itself: expiry, storage medium and
//! thread-safety of stored data belong to the [`CacheProvider`].

mod entry;
mod memory;
mod settings;

pub use entry::StoredEntry;
pub use memory::MemoryProvider;
pub use settings::{RuntimeSettings, CACHE_DISABLED_SETTING};

use crate::error::Result;

// == Cache Provider ==
/// Storage backend the facade forwards every operation to.
///
/// Keys arrive fully namespaced. Implementations report failures as
/// [`CacheError::Provider`](crate::error::CacheError::Provider); the facade
/// hands them to the caller untouched.
pub trait CacheProvider: Send + Sync {
    /// Returns true if a live entry exists under `key`.
    fn has(&self, key: &str) -> Result<bool>;

    /// Returns the content stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` for `minutes` minutes.
    ///
    /// A zero duration stores nothing and drops any existing entry.
    fn put(&self, key: &str, value: String, minutes: u64) -> Result<bool>;

    /// Stores `value` with no expiry.
    fn forever(&self, key: &str, value: String) -> Result<bool>;

    /// Removes one entry. Returns true if something was removed.
    fn forget(&self, key: &str) -> Result<bool>;

    /// Removes every entry whose key starts with `prefix`.
    fn forget_prefix(&self, prefix: &str) -> Result<usize>;

    /// Removes every entry in the provider, regardless of namespace.
    fn flush(&self) -> Result<bool>;
}

// == Settings Provider ==
/// Host configuration lookup.
///
/// Only boolean settings are consulted; unknown names yield `None`.
pub trait SettingsProvider: Send + Sync {
    fn get(&self, setting: &str) -> Option<bool>;
}
