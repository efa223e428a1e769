//! Movie metadata lookup against a remote movie-information API.
//!
//! A lookup resolves a free-text title to canonical title, year, rating and
//! poster. Any failure aborts the add that requested it; nothing is written
//! to the catalog.

mod omdb;
mod types;

pub use omdb::{OmdbClient, OmdbConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when looking up movie metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// No movie matches the title.
    #[error("Movie not found: {0}")]
    NotFound(String),

    /// Connection-level failure (DNS, refused, reset, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The response body could not be interpreted.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for MetadataError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            MetadataError::Timeout
        } else if e.is_decode() {
            MetadataError::MalformedResponse(e.to_string())
        } else {
            MetadataError::Network(e.to_string())
        }
    }
}

/// Trait for metadata lookup backends.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// Resolve a title to its metadata.
    async fn lookup(&self, title: &str) -> Result<MovieMetadata, MetadataError>;
}
