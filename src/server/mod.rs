//! HTTP lookup server.
//!
//! Loads the merged table once, then answers:
//! - `GET /getServices?postcode=XXXX` services at a postcode
//! - `GET /getRCentre?service=NAME` reporting centres offering a service
//!
//! The index is immutable and shared by every request, so handlers never
//! lock.

mod routes;

pub use routes::{ApiError, create_router};

use crate::config::ServerConfig;
use crate::error::Result;
use crate::lookup::CentreIndex;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared state for the web server.
pub type AppState = Arc<CentreIndex>;

/// Load the merged table and serve lookups until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<()> {
    config.validate()?;

    let index: AppState = Arc::new(CentreIndex::load(&config.data_path)?);
    let app = create_router(index);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Starting server at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            warn!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
