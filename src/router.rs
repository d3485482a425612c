use crate::handlers::{health::health_check, openapi::openapi_json};
use crate::schemas::AppState;
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router with all routes and middleware.
///
/// Anything that is not a host endpoint is looked up in the bundle
/// directory; paths with no matching file get `index.html` so client-side
/// routes such as `/report/:id` survive a reload.
pub fn create_router(state: AppState) -> Router {
    let bundle = ServeDir::new(state.dist_dir.as_path())
        .fallback(ServeFile::new(state.index_path()));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        // Frontend bundle
        .fallback_service(bundle)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
