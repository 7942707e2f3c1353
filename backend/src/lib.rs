//! # Movies Backend
//!
//! REST backend for a catalogue of movie and TV show documents.
//!
//! The crate exposes CRUD and search endpoints over movie records. Every
//! response, success or failure, uses the same `{ message, data }` envelope so
//! the frontend can parse all answers the same way.
//!
//! ## Architecture
//!
//! - [`api`]: the `Movie` document and its identifier
//! - [`config`]: layered server configuration (defaults, TOML file, environment)
//! - [`db`]: repository trait, in-memory implementation, and the service layer
//! - [`http`]: Axum-based router, handlers, envelope and error mapping
//!

pub mod api;
pub mod config;
pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
