// ============================================================================
// GHAYMAH TEST APP
// ============================================================================

// - GET / returns a fixed greeting and the current timestamp
// - Listening port from PORT (default 3000)
// - Structured logging
// - Graceful shutdown on Ctrl-C / SIGTERM

mod config;
mod dto;
mod errors;
mod routes;
mod server;

use config::Config;
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env().inspect_err(|e| error!("Invalid configuration: {}", e))?;

    let app = routes::create_router();

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("التطبيق يعمل على المنفذ {}", config.port);

    server::serve(listener, app, server::shutdown_signal()).await?;

    Ok(())
}
