//! crappykv - A tiny key-value HTTP service
//!
//! Backed by a bounded cache with sliding TTL expiration and LRU eviction.

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
