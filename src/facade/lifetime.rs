//! Entry Lifetime Module
//!
//! Maps the integer "minutes to live" convention onto a typed lifetime.

/// Minutes-to-live value meaning "store forever"
pub const FOREVER_MINUTES: i64 = -1;

// == Lifetime ==
/// How long the provider should keep an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifetime {
    /// No expiry
    #[default]
    Forever,
    /// Expires this many minutes after being stored
    Minutes(u64),
}

impl Lifetime {
    /// Interprets a raw minutes value.
    ///
    /// `-1` is forever, positive values are minutes, anything else becomes
    /// `Minutes(0)`, which providers treat as "do not store".
    pub fn from_minutes(minutes: i64) -> Self {
        match minutes {
            FOREVER_MINUTES => Lifetime::Forever,
            m if m > 0 => Lifetime::Minutes(m.unsigned_abs()),
            _ => Lifetime::Minutes(0),
        }
    }
}

impl From<i64> for Lifetime {
    fn from(minutes: i64) -> Self {
        Lifetime::from_minutes(minutes)
    }
}

impl From<i32> for Lifetime {
    fn from(minutes: i32) -> Self {
        Lifetime::from_minutes(i64::from(minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_forever() {
        assert_eq!(Lifetime::from_minutes(-1), Lifetime::Forever);
        assert_eq!(Lifetime::from(-1), Lifetime::Forever);
    }

    #[test]
    fn test_positive_minutes() {
        assert_eq!(Lifetime::from_minutes(15), Lifetime::Minutes(15));
        assert_eq!(Lifetime::from(15_i64), Lifetime::Minutes(15));
    }

    #[test]
    fn test_other_values_store_nothing() {
        assert_eq!(Lifetime::from_minutes(0), Lifetime::Minutes(0));
        assert_eq!(Lifetime::from_minutes(-5), Lifetime::Minutes(0));
        assert_eq!(Lifetime::from_minutes(i64::MIN), Lifetime::Minutes(0));
    }

    #[test]
    fn test_default_is_forever() {
        assert_eq!(Lifetime::default(), Lifetime::Forever);
    }
}
