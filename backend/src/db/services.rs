//! High-level movie service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of [`MovieRepository`]. The business rules that must hold
//! regardless of the storage backend live here: title validation, the
//! existence check before an update, and turning an absent movie into a
//! `MovieNotFound` error for the single-item lookup.
//!
//! # Usage
//!
//! ```no_run
//! use movies_api::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let movies = services::list_movies(&repo).await?;
//!     println!("Found {} movies", movies.len());
//!
//!     Ok(())
//! }
//! ```

use log::{info, warn};

use crate::api::{Movie, MovieId};
use super::repository::{MovieRepository, RepositoryError, RepositoryResult};

// ==================== Health & Connection ====================

/// Check if the store is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: MovieRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Queries ====================

/// List all movies.
pub async fn list_movies<R: MovieRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Movie>> {
    info!("Service layer: listing all movies");
    repo.list().await
}

/// Retrieve a movie by ID.
///
/// # Returns
/// * `Ok(Movie)` - The stored movie
/// * `Err(RepositoryError::MovieNotFound)` - If no movie has this ID
pub async fn get_movie<R: MovieRepository + ?Sized>(
    repo: &R,
    id: &MovieId,
) -> RepositoryResult<Movie> {
    info!("Service layer: loading movie by id {}", id);
    repo.get_by_id(id).await?.ok_or_else(|| RepositoryError::movie_not_found("get_movie", id))
}

/// Movies whose title contains `title`, ignoring case.
///
/// An empty (or blank) needle matches every movie.
pub async fn search_movies_by_title<R: MovieRepository + ?Sized>(
    repo: &R,
    title: &str,
) -> RepositoryResult<Vec<Movie>> {
    info!("Service layer: searching movies with title containing '{}'", title);
    repo.search_by_title(title.trim()).await
}

/// Movies whose featured flag equals `featured`.
pub async fn filter_featured_movies<R: MovieRepository + ?Sized>(
    repo: &R,
    featured: bool,
) -> RepositoryResult<Vec<Movie>> {
    info!("Service layer: filtering movies with featured={}", featured);
    repo.filter_by_featured(featured).await
}

// ==================== Mutations ====================

/// Validate and store a new movie.
///
/// # Returns
/// * `Ok(Movie)` - The stored movie including its assigned ID
/// * `Err(RepositoryError::InvalidMovie)` - If the title is blank
pub async fn insert_movie<R: MovieRepository + ?Sized>(
    repo: &R,
    movie: Movie,
) -> RepositoryResult<Movie> {
    let movie = validate_movie(movie, "insert_movie", None)?;
    info!("Service layer: inserting movie '{}'", movie.title);

    let stored = repo.insert(movie).await?;
    if let Some(ref id) = stored.id {
        info!("Service layer: stored movie with id {}", id);
    }
    Ok(stored)
}

/// Validate and apply an update to an existing movie.
///
/// The existence check and the write are two separate repository calls. A
/// delete that lands between them surfaces as the repository's `MovieNotFound`
/// from [`MovieRepository::update`].
///
/// # Returns
/// * `Ok(Movie)` - The movie as stored after the update
/// * `Err(RepositoryError::MovieNotFound)` - If no movie has this ID
/// * `Err(RepositoryError::InvalidMovie)` - If the title is blank
pub async fn update_movie<R: MovieRepository + ?Sized>(
    repo: &R,
    id: &MovieId,
    movie: Movie,
) -> RepositoryResult<Movie> {
    info!("Service layer: updating movie {}", id);

    if repo.get_by_id(id).await?.is_none() {
        warn!("Service layer: refusing to update missing movie {}", id);
        return Err(RepositoryError::movie_not_found("update_movie", id));
    }

    let movie = validate_movie(movie, "update_movie", Some(id))?;
    repo.update(id, movie).await
}

/// Delete a movie. Deleting a missing movie is not an error.
pub async fn delete_movie<R: MovieRepository + ?Sized>(
    repo: &R,
    id: &MovieId,
) -> RepositoryResult<()> {
    if repo.delete(id).await? {
        info!("Service layer: deleted movie {}", id);
    } else {
        warn!("Service layer: delete requested for missing movie {}", id);
    }
    Ok(())
}

// ==================== Helpers ====================

/// Normalize the title and reject movies without one.
fn validate_movie(
    mut movie: Movie,
    operation: &str,
    id: Option<&MovieId>,
) -> RepositoryResult<Movie> {
    let trimmed = movie.title.trim();
    if trimmed.is_empty() {
        return Err(RepositoryError::blank_title(operation, id));
    }
    if trimmed.len() != movie.title.len() {
        movie.title = trimmed.to_string();
    }
    Ok(movie)
}
