//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// Reads already drop expired entries lazily; this sweep keeps idle keys
/// from holding memory until the next write.
///
/// # Arguments
/// * `cache` - Shared handle to the cache
/// * `interval` - Time between sweeps (must be non-zero)
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::new(CacheStore::new(1000, DEFAULT_TTL));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: SharedCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = cache.cleanup_expired();
            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use crate::clock::ManualClock;
    use std::sync::Arc;

    fn cache_with_clock() -> (SharedCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(0));
        let store = CacheStore::with_clock(100, Duration::from_secs(60), clock.clone());
        (SharedCache::new(store), clock)
    }

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let (cache, clock) = cache_with_clock();
        cache.set("expire_soon".to_string(), "value".to_string());
        clock.advance(Duration::from_secs(61));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(200)).await;

        // len() does not purge, so an empty store means the sweep ran
        assert!(cache.is_empty(), "Expired entry should have been cleaned up");
        assert_eq!(cache.stats().expirations, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let (cache, clock) = cache_with_clock();
        cache.set("long_lived".to_string(), "value".to_string());
        clock.advance(Duration::from_secs(30));

        let handle = spawn_cleanup_task(cache.clone(), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(cache.get("long_lived"), Some("value".to_string()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let (cache, _clock) = cache_with_clock();

        let handle = spawn_cleanup_task(cache, Duration::from_secs(1));
        handle.abort();

        let result = handle.await;
        assert!(result.unwrap_err().is_cancelled());
    }
}
