//! API Module
//!
//! HTTP handlers and routing wrapped around the shared cache.
//!
//! # Endpoints
//! - `GET /crappykv?key=<k>[&value=<v>]` - Read a key, or write it when `value` is given
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint
//! - `GET /startup` - Startup probe
//! - `GET /redirect` - Redirect to the dashboard

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{cors_layer, create_router};
