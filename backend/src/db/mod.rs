//! Database module for movie document storage.
//!
//! This module provides abstractions for persistence via the Repository pattern,
//! allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Logic           │
//! │  - Title validation                                      │
//! │  - Existence check before update                         │
//! │  - Missing movie → MovieNotFound                         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```no_run
//! use movies_api::api::Movie;
//! use movies_api::db::{services, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::create_local();
//!     services::insert_movie(repo.as_ref(), Movie::new("Inception")).await?;
//!     let movies = services::list_movies(repo.as_ref()).await?;
//!     assert_eq!(movies.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod services;


pub use factory::{load_seed_file, RepositoryFactory};
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, MovieRepository, RepositoryError, RepositoryResult};
pub use services::{
    delete_movie, filter_featured_movies, get_movie, health_check, insert_movie, list_movies,
    search_movies_by_title, update_movie,
};
