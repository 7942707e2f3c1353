//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to one endpoint and delegates to the service
//! layer. Every handler answers with an [`ApiEnvelope`], on success and on
//! error.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{Method, Uri},
    Json,
};

use super::dto::{ApiEnvelope, FeaturedQuery, Movie, MovieId, SearchQuery};
use super::error::AppError;
use super::state::AppState;
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult<T = Movie> = Result<Json<ApiEnvelope<T>>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult {
    if services::health_check(state.repository.as_ref()).await? {
        Ok(Json(ApiEnvelope::message_only("Service is healthy")))
    } else {
        Err(AppError::Unavailable("Movie store is unavailable".to_string()))
    }
}

// =============================================================================
// Movie CRUD
// =============================================================================

/// GET /movies
pub async fn list_movies(State(state): State<AppState>) -> HandlerResult {
    let movies = services::list_movies(state.repository.as_ref()).await?;
    Ok(Json(ApiEnvelope::with_data("A List of Movies", movies)))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> HandlerResult {
    let Path(id) = path?;
    let id = MovieId::new(id);
    let movie = services::get_movie(state.repository.as_ref(), &id).await?;
    Ok(Json(ApiEnvelope::single(format!("Movie with id {}", id), movie)))
}

/// POST /movies
///
/// The response carries the stored movie, including the ID the repository assigned.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<Movie>, JsonRejection>,
) -> HandlerResult {
    let Json(movie) = payload?;
    let stored = services::insert_movie(state.repository.as_ref(), movie).await?;
    Ok(Json(ApiEnvelope::single("Movie added", stored)))
}

/// PUT /movies/{id}
pub async fn update_movie(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Movie>, JsonRejection>,
) -> HandlerResult {
    let Path(id) = path?;
    let id = MovieId::new(id);
    let Json(movie) = payload?;
    let updated = services::update_movie(state.repository.as_ref(), &id, movie).await?;
    Ok(Json(ApiEnvelope::single(format!("Movie with id {} is updated", id), updated)))
}

/// DELETE /movies/{id}
///
/// Succeeds whether or not the movie existed.
pub async fn delete_movie(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> HandlerResult {
    let Path(id) = path?;
    services::delete_movie(state.repository.as_ref(), &MovieId::new(id)).await?;
    Ok(Json(ApiEnvelope::message_only("Movie deleted")))
}

// =============================================================================
// Queries
// =============================================================================

/// GET /movies/search?title=
pub async fn search_movies(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> HandlerResult {
    let Query(SearchQuery { title }) = query?;
    let movies = services::search_movies_by_title(state.repository.as_ref(), &title).await?;
    Ok(Json(ApiEnvelope::with_data(
        format!("A List of Movies/TV Shows with title containing: {}", title),
        movies,
    )))
}

/// GET /movies/featured?featured=
pub async fn featured_movies(
    State(state): State<AppState>,
    query: Result<Query<FeaturedQuery>, QueryRejection>,
) -> HandlerResult {
    let Query(query) = query?;
    let featured = query.flag().ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid featured flag '{}': expected true or false",
            query.featured
        ))
    })?;

    let movies = services::filter_featured_movies(state.repository.as_ref(), featured).await?;
    Ok(Json(ApiEnvelope::with_data("A List of Featured Movies", movies)))
}

// =============================================================================
// Fallbacks
// =============================================================================

/// Any unmatched route.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// A known route called with a method it does not serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("Method {} is not allowed on {}", method, uri.path()))
}
