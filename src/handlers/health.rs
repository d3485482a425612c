use axum::{extract::State, response::Json};
use tracing::instrument;
use crate::schemas::{AppState, BundleStatus, HealthResponse};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let bundle = if state.bundle_present() {
        BundleStatus::Present
    } else {
        BundleStatus::Missing
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        bundle,
    })
}
