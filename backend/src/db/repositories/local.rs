//! In-memory local repository implementation.
//!
//! This module provides a local implementation of [`MovieRepository`]
//! suitable for unit testing and local development. All data is stored in
//! memory, providing fast, deterministic, and isolated execution.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{Movie, MovieId};
use crate::db::repository::{MovieRepository, RepositoryError, RepositoryResult};

/// In-memory local repository.
///
/// Clones share the same underlying storage.
///
/// # Example
/// ```
/// use movies_api::api::Movie;
/// use movies_api::db::repositories::LocalRepository;
/// use movies_api::db::repository::MovieRepository;
///
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// runtime.block_on(async {
///     let repo = LocalRepository::new();
///     let stored = repo.insert(Movie::new("Inception")).await.unwrap();
///     assert!(stored.id.is_some());
///     assert_eq!(repo.movie_count(), 1);
/// });
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    movies: HashMap<MovieId, Movie>,
    // Insertion order, so listings are stable
    order: Vec<MovieId>,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            movies: HashMap::new(),
            order: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalData {
    fn ordered(&self) -> impl Iterator<Item = &Movie> {
        self.order.iter().filter_map(|id| self.movies.get(id))
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository pre-populated with `movies`.
    ///
    /// Each movie receives a fresh ID, as with [`MovieRepository::insert`].
    pub fn with_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        let repo = Self::new();
        for movie in movies {
            repo.insert_impl(movie);
        }
        repo
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of movies stored.
    pub fn movie_count(&self) -> usize {
        self.data.read().movies.len()
    }

    /// Check if a movie exists.
    pub fn has_movie(&self, id: &MovieId) -> bool {
        self.data.read().movies.contains_key(id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::unavailable(operation));
        }
        Ok(())
    }

    fn insert_impl(&self, mut movie: Movie) -> Movie {
        let id = MovieId::generate();
        movie.id = Some(id.clone());

        let mut data = self.data.write();
        data.order.push(id.clone());
        data.movies.insert(id, movie.clone());
        movie
    }

    fn collect_matching(&self, predicate: impl Fn(&Movie) -> bool) -> Vec<Movie> {
        let data = self.data.read();
        let movies = data.ordered().filter(|m| predicate(m)).cloned().collect();
        movies
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list(&self) -> RepositoryResult<Vec<Movie>> {
        self.check_health("list")?;
        Ok(self.collect_matching(|_| true))
    }

    async fn get_by_id(&self, id: &MovieId) -> RepositoryResult<Option<Movie>> {
        self.check_health("get_by_id")?;
        Ok(self.data.read().movies.get(id).cloned())
    }

    async fn insert(&self, movie: Movie) -> RepositoryResult<Movie> {
        self.check_health("insert")?;
        Ok(self.insert_impl(movie))
    }

    async fn update(&self, id: &MovieId, mut movie: Movie) -> RepositoryResult<Movie> {
        self.check_health("update")?;

        let mut data = self.data.write();
        let Some(slot) = data.movies.get_mut(id) else {
            return Err(RepositoryError::movie_not_found("update", id));
        };

        movie.id = Some(id.clone());
        *slot = movie.clone();
        Ok(movie)
    }

    async fn delete(&self, id: &MovieId) -> RepositoryResult<bool> {
        self.check_health("delete")?;

        let mut data = self.data.write();
        let existed = data.movies.remove(id).is_some();
        if existed {
            data.order.retain(|existing| existing != id);
        }
        Ok(existed)
    }

    async fn search_by_title(&self, text: &str) -> RepositoryResult<Vec<Movie>> {
        self.check_health("search_by_title")?;
        Ok(self.collect_matching(|m| m.title_contains(text)))
    }

    async fn filter_by_featured(&self, featured: bool) -> RepositoryResult<Vec<Movie>> {
        self.check_health("filter_by_featured")?;
        Ok(self.collect_matching(|m| m.is_featured() == featured))
    }
}
