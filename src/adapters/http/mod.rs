//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`app_router`] assembles them with the cross-cutting layers.

pub mod valuation;

use axum::routing::get;
use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use valuation::valuation_routes;
pub use valuation::ValuationAppState;

/// GET /health - Liveness probe
async fn health() -> &'static str {
    "ok"
}

/// Build the CORS layer from configured origins.
///
/// No configured origins allows any origin.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

/// Create the complete application router.
///
/// # Routes
/// - `GET /health`
/// - `/api/valuations/*` - see [`valuation_routes`]
pub fn app_router(state: ValuationAppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/valuations", valuation_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}
