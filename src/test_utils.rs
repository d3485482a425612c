use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use std::fs;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>smartcharge-test-bundle</body></html>";
pub const APP_JS: &str = "console.log('smartcharge');";

/// Initialize tracing for tests with output to STDERR.
///
/// The log level comes from RUST_LOG, defaulting to WARN.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// A bundle directory holding `index.html` and one asset.
pub fn setup_test_bundle() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create bundle dir");
    fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
    fs::write(dir.path().join("app.js"), APP_JS).expect("Failed to write app.js");
    dir
}

/// Create axum app over `bundle`. The directory must outlive the router.
pub fn setup_test_app(bundle: &TempDir) -> Router {
    let _guard = init_test_tracing();
    create_router(AppState::new(bundle.path().to_path_buf()))
}
