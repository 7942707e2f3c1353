//! Tests for layered configuration loading (file + environment).

mod support;

use std::fs;
use std::path::PathBuf;

use movies_api::config::ServerConfig;
use movies_api::db::RepositoryError;
use support::with_config_env;

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("movies-config-{}-{}", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_without_file_or_env_uses_defaults() {
    // The test binary runs from the crate root, which has no movies.toml
    let config = with_config_env(&[], || ServerConfig::load().unwrap());
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_env_overrides_defaults() {
    let config = with_config_env(
        &[
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("CORS_ALLOWED_ORIGIN", "https://movies.example.com"),
            ("MOVIES_SEED_FILE", "/srv/movies.json"),
        ],
        || ServerConfig::load().unwrap(),
    );

    assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9090");
    assert_eq!(config.cors.allowed_origin, "https://movies.example.com");
    assert_eq!(config.repository.seed_file, Some(PathBuf::from("/srv/movies.json")));
}

#[test]
fn test_env_overrides_file() {
    let path = temp_file(
        "override.toml",
        r#"
[server]
host = "127.0.0.1"
port = 7000

[cors]
allowed_origin = "http://file.example"
"#,
    );
    let path_str = path.to_string_lossy().to_string();

    let config = with_config_env(&[("MOVIES_CONFIG", path_str.as_str()), ("PORT", "7001")], || {
        ServerConfig::load().unwrap()
    });
    fs::remove_file(&path).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 7001);
    assert_eq!(config.cors.allowed_origin, "http://file.example");
}

#[test]
fn test_invalid_port_is_rejected() {
    let err = with_config_env(&[("PORT", "http")], || ServerConfig::load().unwrap_err());
    assert!(matches!(err, RepositoryError::Configuration { .. }));
    assert!(err.message().contains("PORT"));
}

#[test]
fn test_missing_explicit_config_file_is_an_error() {
    let err = with_config_env(&[("MOVIES_CONFIG", "/nope/movies.toml")], || {
        ServerConfig::load().unwrap_err()
    });
    assert!(matches!(err, RepositoryError::Configuration { .. }));
}
