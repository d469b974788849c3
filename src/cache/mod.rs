//! Cache Module
//!
//! Provides in-memory caching with sliding TTL expiration and LRU eviction.

use std::time::Duration;

mod entry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default maximum number of entries
pub const DEFAULT_CAPACITY: usize = 1000;

/// Default idle time before an entry expires (24 hours)
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Maximum allowed key length in characters
pub const MAX_KEY_LENGTH: usize = 1024;

/// Maximum allowed value length in characters
pub const MAX_VALUE_LENGTH: usize = 1024;
