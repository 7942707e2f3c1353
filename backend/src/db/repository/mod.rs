//! Repository trait for abstracting movie storage.
//!
//! This trait defines the interface for all persistence operations, allowing
//! different implementations (in-memory, a document store, etc.) to be
//! swapped via dependency injection.

use async_trait::async_trait;

use crate::api::{Movie, MovieId};

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Repository trait for movie document operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust and allow
/// sharing across threads.
///
/// # Error Handling
/// Lookups return `Ok(None)` for a missing record; an absent movie is not an
/// error at this layer. Only `update` reports `RepositoryError::MovieNotFound`,
/// because it cannot write a record that does not exist.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if the store is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Movie Operations ====================

    /// List every movie in insertion order.
    async fn list(&self) -> RepositoryResult<Vec<Movie>>;

    /// Retrieve a movie by ID.
    ///
    /// # Returns
    /// * `Ok(Some(Movie))` - The stored movie
    /// * `Ok(None)` - If no movie has this ID
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_by_id(&self, id: &MovieId) -> RepositoryResult<Option<Movie>>;

    /// Store a new movie.
    ///
    /// The repository assigns a fresh ID; any ID already set on `movie` is
    /// replaced.
    ///
    /// # Returns
    /// * `Ok(Movie)` - The stored movie including its assigned ID
    async fn insert(&self, movie: Movie) -> RepositoryResult<Movie>;

    /// Replace the fields of an existing movie, keeping its ID.
    ///
    /// # Returns
    /// * `Ok(Movie)` - The movie as stored after the update
    /// * `Err(RepositoryError::MovieNotFound)` - If no movie has this ID
    async fn update(&self, id: &MovieId, movie: Movie) -> RepositoryResult<Movie>;

    /// Delete a movie.
    ///
    /// # Returns
    /// * `Ok(true)` - A movie was removed
    /// * `Ok(false)` - No movie had this ID
    async fn delete(&self, id: &MovieId) -> RepositoryResult<bool>;

    /// Movies whose title contains `text`, ignoring case.
    async fn search_by_title(&self, text: &str) -> RepositoryResult<Vec<Movie>>;

    /// Movies whose featured flag equals `featured`.
    async fn filter_by_featured(&self, featured: bool) -> RepositoryResult<Vec<Movie>>;
}
