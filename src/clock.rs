//! Clock Module
//!
//! Time source abstraction used by the cache for TTL bookkeeping.
//!
//! Entries store millisecond readings from a [`Clock`]. Production code uses
//! [`SystemClock`]; tests drive a [`ManualClock`] so expiry can be checked
//! without sleeping.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

// == Clock Trait ==
/// A monotonic source of "now", in milliseconds.
///
/// Readings are only compared with each other, so the origin is arbitrary.
pub trait Clock: Debug + Send + Sync {
    /// Returns the current reading in milliseconds.
    fn now_ms(&self) -> u64;
}

/// Converts a duration to whole milliseconds, saturating at `u64::MAX`.
pub fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// == System Clock ==
/// Monotonic wall-time clock anchored at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        duration_ms(self.origin.elapsed())
    }
}

// == Manual Clock ==
/// Clock that only moves when told to.
///
/// Can be shared (behind an `Arc`) between a test and the cache it drives.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    /// Creates a clock reading `start_ms`.
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: AtomicU64::new(start_ms),
        }
    }

    /// Jumps to an absolute reading.
    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let by_ms = duration_ms(by);
        // The closure always returns Some, so the update cannot fail
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(by_ms))
            });
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_starts_at_given_reading() {
        let clock = ManualClock::new(42);
        assert_eq!(clock.now_ms(), 42);
    }

    #[test]
    fn test_manual_clock_advance_and_set() {
        let clock = ManualClock::default();
        assert_eq!(clock.now_ms(), 0);

        clock.advance(Duration::from_millis(250));
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now_ms(), 1250);

        clock.set(10);
        assert_eq!(clock.now_ms(), 10);
    }

    #[test]
    fn test_duration_ms_saturates() {
        assert_eq!(duration_ms(Duration::from_millis(1500)), 1500);
        assert_eq!(duration_ms(Duration::from_secs(u64::MAX)), u64::MAX);
    }

    #[test]
    fn test_manual_clock_advance_saturates() {
        let clock = ManualClock::new(u64::MAX - 10);
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now_ms(), u64::MAX);
    }

    #[test]
    fn test_manual_clock_shared_as_trait_object() {
        let manual = Arc::new(ManualClock::new(0));
        let shared: Arc<dyn Clock> = manual.clone();

        manual.advance(Duration::from_millis(5));
        assert_eq!(shared.now_ms(), 5);
    }
}
