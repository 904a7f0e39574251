//! DevSecOps Platform - status and numeric aggregation service.
//!
//! Exposes a liveness endpoint and an endpoint that reports count, sum and
//! average of a list of numbers.

use std::sync::Arc;

mod api;
mod config;
mod domain;
mod error;
mod logging;
mod server;

use crate::api::build_router;
use crate::config::Config;
use crate::domain::{Clock, SystemClock};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Wall-clock source for the status endpoint.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Logging is configured from the loaded settings, so failures here go to stderr
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    logging::init(config.logging.format);

    tracing::info!(
        "Starting {} v{}",
        domain::SERVICE_NAME,
        env!("CARGO_PKG_VERSION")
    );

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        docs_enabled = %config.docs.enabled,
        log_format = ?config.logging.format,
        "Configuration loaded"
    );

    let state = AppState::new(Arc::new(SystemClock));
    let app = build_router(state, config.docs.enabled);

    if config.docs.enabled {
        tracing::info!("Swagger UI available at /swagger-ui/");
    }

    server::serve(&config.server, app).await
}
