//! Error types for repository operations.
//!
//! Every variant carries the message that is safe to show to API clients plus
//! an [`ErrorContext`] that is only meant for logs.

use std::fmt;
use std::path::Path;

use crate::api::MovieId;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Where a repository error was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation being performed (e.g. "update_movie", "load_seed_file")
    pub operation: String,
    /// The movie involved, when there is one
    pub movie_id: Option<MovieId>,
    /// Offending field or file
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            movie_id: None,
            details: None,
        }
    }

    pub fn with_movie_id(mut self, id: &MovieId) -> Self {
        self.movie_id = Some(id.clone());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[operation={}", self.operation)?;
        if let Some(ref id) = self.movie_id {
            write!(f, ", movie={}", id)?;
        }
        if let Some(ref details) = self.details {
            write!(f, ", details={}", details)?;
        }
        f.write_str("]")
    }
}

/// Error type for repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The movie store cannot serve requests.
    #[error("Store unavailable: {message} {context}")]
    Unavailable {
        message: String,
        context: ErrorContext,
    },

    /// No movie has the requested ID.
    #[error("Movie not found: {message} {context}")]
    MovieNotFound {
        message: String,
        context: ErrorContext,
    },

    /// The submitted movie was rejected before the store was touched.
    #[error("Invalid movie: {message} {context}")]
    InvalidMovie {
        message: String,
        context: ErrorContext,
    },

    /// Server configuration or seed data could not be loaded.
    #[error("Configuration error: {message} {context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// The store refused `operation` because it is unhealthy.
    pub fn unavailable(operation: impl Into<String>) -> Self {
        Self::Unavailable {
            message: "Movie store is unavailable".to_string(),
            context: ErrorContext::new(operation),
        }
    }

    /// `operation` needed the movie `id`, and no such movie exists.
    pub fn movie_not_found(operation: impl Into<String>, id: &MovieId) -> Self {
        Self::MovieNotFound {
            message: format!("Movie with id {} is not found", id),
            context: ErrorContext::new(operation).with_movie_id(id),
        }
    }

    /// The submitted title is empty once trimmed.
    ///
    /// `id` is the movie being replaced, or `None` on insert.
    pub fn blank_title(operation: impl Into<String>, id: Option<&MovieId>) -> Self {
        let mut context = ErrorContext::new(operation).with_details("title");
        context.movie_id = id.cloned();
        Self::InvalidMovie {
            message: "Movie title must not be empty".to_string(),
            context,
        }
    }

    /// A setting or its value is malformed.
    pub fn configuration(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::new(operation),
        }
    }

    /// The file at `path` could not be read or parsed.
    pub fn bad_file(operation: impl Into<String>, path: &Path, message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            context: ErrorContext::new(operation).with_details(path.display().to_string()),
        }
    }

    /// The client-facing message, without the context.
    pub fn message(&self) -> &str {
        match self {
            Self::Unavailable { message, .. }
            | Self::MovieNotFound { message, .. }
            | Self::InvalidMovie { message, .. }
            | Self::Configuration { message, .. } => message,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Unavailable { context, .. }
            | Self::MovieNotFound { context, .. }
            | Self::InvalidMovie { context, .. }
            | Self::Configuration { context, .. } => context,
        }
    }
}
