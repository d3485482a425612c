use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::config::{HostConfig, HostOverrides};
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(config_path: &str, overrides: HostOverrides) -> Result<()> {
    trace!("Entering serve function");
    info!("SmartCharge static host starting up");

    let config = match HostConfig::load(config_path, overrides) {
        Ok(config) => {
            debug!("Configuration loaded: {:?}", config);
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(config.dist_dir.clone());
    if !state.bundle_present() {
        warn!(
            "No index.html in {}; run `trunk build` in workspace/frontend first",
            config.dist_dir.display()
        );
    }

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("SmartCharge running on http://{}", config.bind_address);
    info!("OpenAPI document at http://{}/api-docs/openapi.json", config.bind_address);

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
