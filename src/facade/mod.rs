//! Facade Module
//!
//! Namespaced key/value access over a [`CacheProvider`](crate::provider::CacheProvider),
//! with optional tagging of content read back from the cache.

mod key;
mod keyed;
mod lifetime;
mod lookup;
mod options;
mod stats;


// Re-export public types
pub use key::{build_cache_key, CacheKey, KEY_SEPARATOR};
pub use keyed::KeyedCacheFacade;
pub use lifetime::{Lifetime, FOREVER_MINUTES};
pub use lookup::Lookup;
pub use options::FacadeOptions;
pub use stats::FacadeStats;

// == Public Constants ==
/// Key prefix used until a caller overrides it
pub const DEFAULT_KEY_PREFIX: &str = "simple-cache-";

/// Marker appended to tagged reads until a caller overrides it
pub const DEFAULT_CACHE_TAG: &str = "<!-- cache -->";
