//! Simple Cache - a namespacing facade over a pluggable cache provider
//!
//! Prefixes keys, optionally tags content read back from the cache, and
//! forwards storage, retrieval and flushes to a [`provider::CacheProvider`].

pub mod api;
pub mod config;
pub mod error;
pub mod facade;
pub mod models;
pub mod provider;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{CacheError, Result};
pub use facade::{build_cache_key, KeyedCacheFacade, Lifetime, Lookup};
pub use provider::{CacheProvider, MemoryProvider, RuntimeSettings, SettingsProvider};
pub use tasks::spawn_cleanup_task;
