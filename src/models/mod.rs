//! Request and Response models for the cache server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query strings and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::KvQuery;
pub use responses::{ErrorResponse, HealthResponse, KvResponse, StatsResponse};
