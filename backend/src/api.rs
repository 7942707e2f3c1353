//! Public API surface for the movies backend.
//!
//! This file holds the document types exchanged over the HTTP API and stored by
//! the repositories. All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Movie identifier (assigned by the persistence layer).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl MovieId {
    pub fn new(value: impl Into<String>) -> Self {
        MovieId(value.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        MovieId(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        MovieId(value.to_string())
    }
}

impl From<String> for MovieId {
    fn from(value: String) -> Self {
        MovieId(value)
    }
}

/// A movie (or TV show) document.
///
/// Only `id`, `title` and `featured` are interpreted by the backend. Every other
/// attribute sent by a client is kept in [`Movie::attributes`] and written back
/// unchanged, so the record stays open to whatever fields the frontend uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Identifier; `None` until the movie has been stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MovieId>,
    /// Display title, searched by `/movies/search`
    #[serde(default)]
    pub title: String,
    /// Featured flag; a missing flag counts as not featured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    /// Pass-through attributes (year, genres, poster, ...)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Movie {
    /// Create a movie with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            featured: None,
            attributes: Map::new(),
        }
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether the movie is featured, treating a missing flag as `false`.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Case-insensitive substring match on the title.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
