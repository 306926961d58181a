//! Facade Statistics Module
//!
//! Tracks how reads and writes through the facade turned out.

use serde::Serialize;

// == Facade Stats ==
/// Counters for facade operations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FacadeStats {
    /// Reads that returned content
    pub hits: u64,
    /// Reads with no live entry
    pub misses: u64,
    /// Reads refused because caching is disabled
    pub disabled: u64,
    /// Writes the provider accepted
    pub writes: u64,
    /// Global flushes
    pub flushes: u64,
}

impl FacadeStats {
    // == Constructor ==
    /// Creates a new FacadeStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the hit rate over reads that reached the provider.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no such reads happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_disabled(&mut self) {
        self.disabled += 1;
    }

    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    pub fn record_flush(&mut self) {
        self.flushes += 1;
    }
}
