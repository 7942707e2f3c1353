//! Movies HTTP Server Binary
//!
//! This is the main entry point for the movies REST API server.
//! It loads the configuration, initializes the repository, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin movies-server
//!
//! # Preload movies and listen on another port
//! MOVIES_SEED_FILE=movies.json PORT=9090 cargo run --bin movies-server
//! ```
//!
//! # Environment Variables
//!
//! - `MOVIES_CONFIG`: Path to a TOML configuration file (default: `movies.toml` if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CORS_ALLOWED_ORIGIN`: Allowed browser origin (default: http://localhost:3000)
//! - `MOVIES_SEED_FILE`: JSON array of movies loaded at startup
//! - `RUST_LOG`: Log filter (default: info)

use tracing::info;
use tracing_subscriber::EnvFilter;

use movies_api::config::ServerConfig;
use movies_api::db::RepositoryFactory;
use movies_api::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting movies HTTP server");

    let config = ServerConfig::load()?;
    let addr = config.socket_addr()?;

    let repository = RepositoryFactory::from_settings(&config.repository)?;
    info!("Repository initialized successfully");

    info!("Allowing cross-origin requests from {}", config.cors.allowed_origin);
    let app = create_router(AppState::with_config(repository, config));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, draining connections");
}
