//! Server configuration file and environment handling.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! max_body_bytes = 1048576
//!
//! [cors]
//! allowed_origin = "http://localhost:3000"
//!
//! [repository]
//! seed_file = "movies.json"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::db::repository::RepositoryError;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "MOVIES_CONFIG";

/// File looked up in the working directory when `MOVIES_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "movies.toml";

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub repository: RepositorySettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Cross-origin settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorsSettings {
    /// The single browser origin allowed to call the API
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

/// In-memory repository settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositorySettings {
    /// JSON array of movies loaded at startup
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    1024 * 1024
}

fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(ServerConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            let message = format!("Failed to read config file: {}", e);
            RepositoryError::bad_file("load_config", path, message)
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        toml::from_str(content).map_err(|e| {
            let message = format!("Failed to parse config file: {}", e);
            RepositoryError::configuration("load_config", message)
        })
    }

    /// Load the configuration the server starts with.
    ///
    /// Reads the file named by `MOVIES_CONFIG`, or `movies.toml` in the
    /// working directory if present, then applies environment overrides.
    /// A missing default file is not an error; a missing explicit file is.
    pub fn load() -> Result<Self, RepositoryError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env()?;
        Ok(config)
    }

    /// Override settings from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST`: Server host
    /// - `PORT`: Server port
    /// - `CORS_ALLOWED_ORIGIN`: Browser origin allowed for cross-origin calls
    /// - `MOVIES_SEED_FILE`: JSON file with movies to preload
    ///
    /// # Errors
    /// Returns an error if `PORT` is not a valid port number.
    pub fn apply_env(&mut self) -> Result<(), RepositoryError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                RepositoryError::configuration(
                    "apply_env",
                    format!("PORT must be a valid port number, got '{}'", port),
                )
            })?;
        }
        if let Ok(origin) = env::var("CORS_ALLOWED_ORIGIN") {
            self.cors.allowed_origin = origin;
        }
        if let Ok(seed) = env::var("MOVIES_SEED_FILE") {
            self.repository.seed_file = Some(PathBuf::from(seed));
        }
        Ok(())
    }

    /// The socket address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, RepositoryError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                RepositoryError::configuration(
                    "socket_addr",
                    format!(
                        "Invalid bind address {}:{}: {}",
                        self.server.host, self.server.port, e
                    ),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_body_bytes, 1024 * 1024);
        assert_eq!(config.cors.allowed_origin, "http://localhost:3000");
        assert!(config.repository.seed_file.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cors.allowed_origin, "http://localhost:3000");
    }

    #[test]
    fn test_full_toml() {
        let config = ServerConfig::from_toml_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 3001
            max_body_bytes = 2048

            [cors]
            allowed_origin = "https://movies.example.com"

            [repository]
            seed_file = "data/movies.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.max_body_bytes, 2048);
        assert_eq!(config.cors.allowed_origin, "https://movies.example.com");
        assert_eq!(config.repository.seed_file, Some(PathBuf::from("data/movies.json")));
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3001");
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = ServerConfig::from_toml_str("[server]\nport = \"eighty\"").unwrap_err();
        assert!(matches!(err, RepositoryError::Configuration { .. }));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = ServerConfig::from_file("/definitely/not/here/movies.toml").unwrap_err();
        assert!(matches!(err, RepositoryError::Configuration { .. }));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_bind_address() {
        let mut config = ServerConfig::default();
        config.server.host = "not a host".to_string();
        assert!(config.socket_addr().is_err());
    }
}
