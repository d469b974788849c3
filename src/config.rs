//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL};

/// Origin allowed by CORS unless `CORS_ALLOW_ORIGIN` says otherwise
pub const DEFAULT_CORS_ORIGIN: &str = "https://play.grafana.org";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Idle time in seconds after which an entry expires
    pub ttl_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Origin allowed by CORS; `None` allows any origin
    pub cors_allow_origin: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `CACHE_TTL` - Idle TTL in seconds (default: 86400)
    /// - `PORT` - HTTP server port (default: 8080)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `CORS_ALLOW_ORIGIN` - Allowed CORS origin, `*` for any (default: https://play.grafana.org)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            ttl_secs: parse_var("CACHE_TTL").unwrap_or(defaults.ttl_secs),
            server_port: parse_var("PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            cors_allow_origin: match env::var("CORS_ALLOW_ORIGIN") {
                Ok(origin) if origin.trim() == "*" => None,
                Ok(origin) if !origin.trim().is_empty() => Some(origin.trim().to_string()),
                _ => defaults.cors_allow_origin,
            },
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn cleanup_interval(&self) -> Duration {
        // tokio intervals panic on a zero period
        Duration::from_secs(self.cleanup_interval.max(1))
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CAPACITY,
            ttl_secs: DEFAULT_TTL.as_secs(),
            server_port: 8080,
            cleanup_interval: 60,
            cors_allow_origin: Some(DEFAULT_CORS_ORIGIN.to_string()),
        }
    }
}
