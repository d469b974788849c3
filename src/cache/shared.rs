//! Shared Cache Handle
//!
//! Thread-safe, cloneable handle around a single [`CacheStore`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheStats, CacheStore};

// == Shared Cache ==
/// Process-wide cache handle passed to request handlers and background tasks.
///
/// Every operation takes the lock once and never awaits while holding it.
/// Reads need the lock exclusively too, since they update recency.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<Mutex<CacheStore>>,
}

impl SharedCache {
    pub fn new(store: CacheStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key)
    }

    pub fn set(&self, key: String, value: String) {
        self.inner.lock().set(key, value);
    }

    // == Read Or Write ==
    /// Stores `value` under `key` when given, otherwise reads `key`.
    ///
    /// Returns the value now associated with the key: the one just written,
    /// or the stored one (`None` if absent or expired).
    pub fn read_or_write(&self, key: &str, value: Option<String>) -> Option<String> {
        let mut store = self.inner.lock();
        match value {
            Some(value) => {
                store.set(key.to_string(), value.clone());
                Some(value)
            }
            None => store.get(key),
        }
    }

    /// Purges expired entries, returning how many were removed.
    pub fn cleanup_expired(&self) -> usize {
        self.inner.lock().cleanup_expired()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
