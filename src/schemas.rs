use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory holding the built single-page app
    pub dist_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(dist_dir: PathBuf) -> Self {
        Self { dist_dir: Arc::new(dist_dir) }
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn bundle_present(&self) -> bool {
        self.index_path().is_file()
    }
}

/// Whether the frontend bundle was found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BundleStatus {
    Present,
    Missing,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    /// Crate version
    pub version: String,
    pub bundle: BundleStatus,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
    ),
    components(
        schemas(
            HealthResponse,
            BundleStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "SmartCharge Static Host",
        description = "Serves the SmartCharge map, admin panel and report viewer bundle",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
