use axum::response::Json;
use utoipa::OpenApi;
use crate::schemas::ApiDoc;

/// The host's own OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
