//! Cache Store Module
//!
//! Main cache engine: a recency-ordered map with capacity-bound LRU eviction
//! and sliding TTL expiration.

use std::sync::Arc;
use std::time::Duration;

use lru::LruCache;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::clock::{duration_ms, Clock, SystemClock};

// == Cache Store ==
/// Bounded cache with LRU eviction and idle-time expiry.
///
/// Every successful `get` and every `set` moves the entry to the
/// most-recently-used end and restarts its TTL. Since the TTL is the same for
/// all entries, recency order is also touch-time order, so expired entries
/// always collect at the least-recently-used end.
#[derive(Debug)]
pub struct CacheStore {
    /// Entries ordered from most to least recently touched
    entries: LruCache<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Idle time after which an entry is dropped
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a store driven by the system clock.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries (at least 1)
    /// * `ttl` - Idle time after which an entry expires
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(capacity, ttl, Arc::new(SystemClock::new()))
    }

    /// Creates a store driven by an explicit clock.
    pub fn with_clock(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: LruCache::unbounded(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
            ttl,
            clock,
        }
    }

    // == Set ==
    /// Inserts or overwrites `key`, touching it.
    ///
    /// Expired entries are purged first; then least-recently-used entries are
    /// evicted until the store is back within capacity.
    pub fn set(&mut self, key: String, value: String) {
        let now = self.clock.now_ms();
        self.purge_expired_at(now);

        // `put` on an existing key replaces the value and promotes the entry
        self.entries.put(key, CacheEntry::new(value, now));

        while self.entries.len() > self.capacity {
            match self.entries.pop_lru() {
                Some((evicted_key, _)) => {
                    debug!(key = %evicted_key, "Evicted least recently used entry");
                    self.stats.record_eviction();
                }
                None => break,
            }
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the value for `key` and touches it.
    ///
    /// Missing and expired keys return `None`; an expired entry is removed.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let now = self.clock.now_ms();
        let ttl_ms = self.ttl_ms();

        let expired = match self.entries.peek(key) {
            Some(entry) => entry.is_expired(now, ttl_ms),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.pop(key);
            debug!(key = %key, "Dropped expired entry on read");
            self.stats.record_expirations(1);
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        // `get_mut` promotes the entry to most recently used
        let entry = self.entries.get_mut(key)?;
        entry.touch(now);
        self.stats.record_hit();
        Some(entry.value.clone())
    }

    // == Contains ==
    /// Checks whether `key` holds a live entry, without touching it.
    pub fn contains(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .peek(key)
            .is_some_and(|entry| !entry.is_expired(now, self.ttl_ms()))
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        self.purge_expired_at(now)
    }

    /// Pops expired entries from the least-recently-used end.
    fn purge_expired_at(&mut self, now: u64) -> usize {
        let ttl_ms = self.ttl_ms();
        let mut removed = 0;

        loop {
            let expired = self
                .entries
                .peek_lru()
                .is_some_and(|(_, entry)| entry.is_expired(now, ttl_ms));
            if !expired {
                break;
            }
            self.entries.pop_lru();
            removed += 1;
        }

        if removed > 0 {
            debug!(removed, "Purged expired entries");
            self.stats.record_expirations(removed);
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn ttl_ms(&self) -> u64 {
        duration_ms(self.ttl)
    }
}
