//! Stored Entry Module
//!
//! Defines the structure for entries held by the in-memory provider.

use chrono::{DateTime, Duration, Utc};

// == Stored Entry ==
/// A single provider entry with content and expiry metadata.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    /// The stored content
    pub value: String,
    /// Expiration time, None = stored forever
    pub expires_at: Option<DateTime<Utc>>,
}

impl StoredEntry {
    // == Constructors ==
    /// Creates an entry that expires `minutes` minutes from now.
    pub fn for_minutes(value: String, minutes: u64) -> Self {
        let now = Utc::now();
        // chrono durations are i64 milliseconds internally; clamp absurd TTLs.
        let minutes = i64::try_from(minutes).unwrap_or(i64::MAX / 60_000);
        let expires_at = Duration::try_minutes(minutes).and_then(|ttl| now.checked_add_signed(ttl));

        Self {
            value,
            expires_at: Some(expires_at.unwrap_or(DateTime::<Utc>::MAX_UTC)),
        }
    }

    /// Creates an entry that never expires.
    pub fn forever(value: String) -> Self {
        Self {
            value,
            expires_at: None,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its expiration time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Checks expiry against an explicit instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}
