//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    health_handler, kv_handler, not_found_handler, redirect_handler, startup_handler,
    stats_handler, AppState,
};

/// Builds the CORS layer.
///
/// Restricts to `allowed_origin` when given and valid as a header value,
/// otherwise allows any origin.
pub fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let origin = match allowed_origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(err)) => {
            warn!("Ignoring invalid CORS origin: {}", err);
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /crappykv` - Read or write a key
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
/// - `GET /startup` - Startup probe
/// - `GET /redirect` - Redirect to the dashboard
///
/// Anything else answers 404 with a JSON error body.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/crappykv", get(kv_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/startup", get(startup_handler))
        .route("/redirect", get(redirect_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
