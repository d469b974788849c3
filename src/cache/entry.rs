//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with sliding TTL support.

// == Cache Entry ==
/// A stored value plus the time it was last read or written.
///
/// The key lives in the owning map, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Last touch (read or write), in clock milliseconds
    pub touched_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry touched at `now_ms`.
    pub fn new(value: String, now_ms: u64) -> Self {
        Self {
            value,
            touched_at: now_ms,
        }
    }

    // == Age ==
    /// Milliseconds since the last touch. A clock reading older than the
    /// touch counts as age zero.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.touched_at)
    }

    // == Is Expired ==
    /// Checks if the entry has been idle for at least `ttl_ms`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is expired.
    pub fn is_expired(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) >= ttl_ms
    }

    // == Touch ==
    /// Resets the idle timer.
    pub fn touch(&mut self, now_ms: u64) {
        self.touched_at = now_ms;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("test_value".to_string(), 1_000);

        assert_eq!(entry.value, "test_value");
        assert_eq!(entry.touched_at, 1_000);
        assert_eq!(entry.age_ms(1_000), 0);
    }

    #[test]
    fn test_entry_empty_value() {
        let entry = CacheEntry::new(String::new(), 0);
        assert_eq!(entry.value, "");
        assert!(!entry.is_expired(0, 10));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("v".to_string(), 100);

        assert!(!entry.is_expired(100, 50));
        assert!(!entry.is_expired(149, 50));
        assert!(entry.is_expired(151, 50));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("v".to_string(), 100);
        assert!(entry.is_expired(150, 50), "Entry should be expired at boundary");
    }

    #[test]
    fn test_touch_resets_age() {
        let mut entry = CacheEntry::new("v".to_string(), 0);
        assert!(entry.is_expired(60, 50));

        entry.touch(40);
        assert_eq!(entry.age_ms(60), 20);
        assert!(!entry.is_expired(60, 50));
    }

    #[test]
    fn test_age_with_clock_behind_touch() {
        let entry = CacheEntry::new("v".to_string(), 500);
        assert_eq!(entry.age_ms(100), 0);
        assert!(!entry.is_expired(100, 1));
    }
}
