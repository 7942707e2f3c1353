//! Data Transfer Objects for the HTTP API.
//!
//! Every response body is an [`ApiEnvelope`]; request bodies are plain
//! [`Movie`] documents.

use serde::{Deserialize, Serialize};

pub use crate::api::{Movie, MovieId};

/// Uniform response body: `{ "message": string, "data": [Movie] | null }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T = Movie> {
    /// Human-readable outcome
    pub message: String,
    /// Result records, or `null` when the operation returns none
    pub data: Option<Vec<T>>,
}

impl<T> ApiEnvelope<T> {
    /// Envelope carrying a list of records.
    pub fn with_data(message: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
        }
    }

    /// Envelope carrying exactly one record.
    pub fn single(message: impl Into<String>, item: T) -> Self {
        Self::with_data(message, vec![item])
    }

    /// Envelope with `data: null`.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

/// Query parameters for the title search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Substring to look for in titles
    pub title: String,
}

/// Query parameters for the featured endpoint.
///
/// Kept as text so an unparsable flag can be reported in an envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedQuery {
    pub featured: String,
}

impl FeaturedQuery {
    /// Parse the flag: `true`/`false`, `1`/`0` or `yes`/`no`, any case.
    pub fn flag(&self) -> Option<bool> {
        match self.featured.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        }
    }
}
