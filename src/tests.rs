use crate::schemas::{ApiDoc, BundleStatus, HealthResponse};
use crate::test_utils::{setup_test_app, setup_test_bundle, APP_JS, INDEX_HTML};
use axum::http::StatusCode;
use axum_test::TestServer;
use utoipa::OpenApi;

#[tokio::test]
async fn test_health_check() {
    let bundle = setup_test_bundle();
    let server = TestServer::new(setup_test_app(&bundle)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(body.bundle, BundleStatus::Present);
}

#[tokio::test]
async fn test_health_reports_missing_bundle() {
    let empty = tempfile::tempdir().unwrap();
    let server = TestServer::new(setup_test_app(&empty)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["bundle"], "missing");
}

#[tokio::test]
async fn test_asset_served_as_is() {
    let bundle = setup_test_bundle();
    let server = TestServer::new(setup_test_app(&bundle)).unwrap();

    let response = server.get("/app.js").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), APP_JS);
}

#[tokio::test]
async fn test_root_serves_index() {
    let bundle = setup_test_bundle();
    let server = TestServer::new(setup_test_app(&bundle)).unwrap();

    let response = server.get("/").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), INDEX_HTML);
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let bundle = setup_test_bundle();
    let server = TestServer::new(setup_test_app(&bundle)).unwrap();

    for path in ["/admin", "/drift", "/report/65a1f0c2", "/no/such/page"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML, "path {}", path);
    }
}

#[tokio::test]
async fn test_openapi_document_served() {
    let bundle = setup_test_bundle();
    let server = TestServer::new(setup_test_app(&bundle)).unwrap();

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["paths"]["/health"]["get"].is_object());
}

#[test]
fn test_openapi_schema_generation() {
    let openapi = ApiDoc::openapi();

    let components = openapi.components.as_ref().unwrap();
    assert!(components.schemas.contains_key("HealthResponse"));
    assert!(components.schemas.contains_key("BundleStatus"));

    assert!(serde_json::to_string(&openapi).is_ok());
}
