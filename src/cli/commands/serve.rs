use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace, warn};

use crate::config::{initialize_app_state, HostConfig};
use crate::router::create_router;

pub async fn serve(config: HostConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("Asset viewer host starting up");
    debug!("Bind address: {}", config.bind_address);
    debug!("Static directory: {}", config.static_dir.display());

    if !config.static_dir.join("index.html").is_file() {
        warn!(
            "No index.html in {}; only the API will be useful until the viewer is built",
            config.static_dir.display()
        );
    }

    // Initialize application state
    trace!("Initializing application state");
    let state = match initialize_app_state(&config) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state, &config.static_dir);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", config.bind_address);
    let listener = match TcpListener::bind(&config.bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", config.bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", config.bind_address, e);
            return Err(e.into());
        }
    };

    info!("Asset viewer running on http://{}", config.bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
