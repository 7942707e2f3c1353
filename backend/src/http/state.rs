//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::repository::MovieRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for movie storage
    pub repository: Arc<dyn MovieRepository>,
    /// Settings the router is built from (CORS origin, body limit)
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state with the given repository and default settings.
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self::with_config(repository, ServerConfig::default())
    }

    /// Create a new application state with explicit settings.
    pub fn with_config(repository: Arc<dyn MovieRepository>, config: ServerConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }
}
