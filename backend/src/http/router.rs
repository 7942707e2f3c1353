//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::state::AppState;
use crate::config::CorsSettings;

/// Build a CORS layer that admits exactly one browser origin.
///
/// An origin that is not a valid header value admits nothing.
pub fn build_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    match HeaderValue::from_str(&settings.allowed_origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!(
                "Ignoring invalid CORS origin '{}'; cross-origin requests will be refused",
                settings.allowed_origin
            );
            layer
        }
    }
}

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors);
    let body_limit = state.config.server.max_body_bytes;

    Router::new()
        .route("/health", get(handlers::health_check))
        // Movie CRUD
        .route("/movies", get(handlers::list_movies).post(handlers::create_movie))
        .route(
            "/movies/{id}",
            get(handlers::get_movie)
                .put(handlers::update_movie)
                .delete(handlers::delete_movie),
        )
        // Queries
        .route("/movies/search", get(handlers::search_movies))
        .route("/movies/featured", get(handlers::featured_movies))
        // Registered after the routes it applies to
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::route_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
