//! Repository factory for dependency injection.
//!
//! This module creates repository instances from runtime configuration.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{MovieRepository, RepositoryError, RepositoryResult};
use crate::api::Movie;
use crate::config::RepositorySettings;

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use movies_api::config::RepositorySettings;
/// use movies_api::db::RepositoryFactory;
///
/// let repo = RepositoryFactory::from_settings(&RepositorySettings::default()).unwrap();
/// # let _ = repo;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn MovieRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create the repository described by `settings`.
    ///
    /// When a seed file is configured its movies are loaded before the
    /// repository is handed out.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn MovieRepository>)` - Repository instance
    /// * `Err(RepositoryError)` - If the seed file cannot be read or parsed
    pub fn from_settings(
        settings: &RepositorySettings,
    ) -> RepositoryResult<Arc<dyn MovieRepository>> {
        match settings.seed_file {
            Some(ref path) => {
                let movies = load_seed_file(path)?;
                log::info!(
                    "Seeding repository with {} movies from {}",
                    movies.len(),
                    path.display()
                );
                Ok(Arc::new(LocalRepository::with_movies(movies)))
            }
            None => Ok(Self::create_local()),
        }
    }
}

/// Read a JSON array of movies.
///
/// IDs present in the file are discarded; the repository assigns new ones.
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Vec<Movie>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        let message = format!("Failed to read seed file: {}", e);
        RepositoryError::bad_file("load_seed_file", path, message)
    })?;

    serde_json::from_str(&content).map_err(|e| {
        let message = format!("Failed to parse seed file: {}", e);
        RepositoryError::bad_file("load_seed_file", path, message)
    })
}
