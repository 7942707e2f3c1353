//! HTTP error handling and response types.
//!
//! Errors render as the same envelope successful responses use, with
//! `data: null`. The status code follows from the error kind; messages are
//! never inspected.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ApiEnvelope;
use crate::db::repository::RepositoryError;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource or route not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Known route, unsupported method
    MethodNotAllowed(String),
    /// Backing store unreachable
    Unavailable(String),
    /// Request rejected by an extractor before reaching the handler
    Rejected { status: StatusCode, message: String },
    /// Repository error
    Repository(RepositoryError),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Rejected { status, .. } => *status,
            AppError::Repository(e) => match e {
                RepositoryError::MovieNotFound { .. } => StatusCode::NOT_FOUND,
                RepositoryError::InvalidMovie { .. } => StatusCode::BAD_REQUEST,
                RepositoryError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
                RepositoryError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message sent to the client.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::MethodNotAllowed(msg)
            | AppError::Unavailable(msg)
            | AppError::Rejected { message: msg, .. } => msg,
            AppError::Repository(e) => e.message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let AppError::Repository(ref e) = self {
            let operation = e.context().operation.as_str();
            if status.is_server_error() {
                tracing::error!(status = %status, operation, "{}", e);
            } else {
                tracing::debug!(status = %status, operation, "{}", e);
            }
        }

        let body: ApiEnvelope = ApiEnvelope::message_only(self.message());
        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MovieId;
    use std::path::Path;

    #[test]
    fn test_repository_errors_map_by_kind() {
        let id = MovieId::new("7");
        let cases = [
            (RepositoryError::movie_not_found("get_movie", &id), StatusCode::NOT_FOUND),
            (RepositoryError::blank_title("insert_movie", None), StatusCode::BAD_REQUEST),
            (RepositoryError::unavailable("list"), StatusCode::SERVICE_UNAVAILABLE),
            (
                RepositoryError::configuration("apply_env", "bad port"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_message_text_does_not_change_status() {
        // A configuration failure whose text mentions "not found" is still a 500
        let err = AppError::from(RepositoryError::bad_file(
            "load_seed_file",
            Path::new("seed.json"),
            "Failed to read seed file: not found",
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_message_omits_context() {
        let err = AppError::from(RepositoryError::movie_not_found("get_movie", &MovieId::new("7")));
        assert_eq!(err.message(), "Movie with id 7 is not found");
    }

    #[test]
    fn test_rejected_keeps_status() {
        let err = AppError::Rejected {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: application/json`".to_string(),
        };
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(err.into_response().status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_method_not_allowed_is_405() {
        let err = AppError::MethodNotAllowed("Method PATCH is not allowed on /movies/1".into());
        assert_eq!(err.into_response().status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
