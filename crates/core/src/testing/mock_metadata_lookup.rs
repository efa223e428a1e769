//! Mock metadata lookup for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::metadata::{MetadataError, MetadataLookup, MovieMetadata};

/// Mock implementation of the MetadataLookup trait.
///
/// Provides controllable behavior for testing:
/// - Return configured movies, matched by title ignoring case
/// - Track queries for assertions
/// - Simulate failures
#[derive(Debug, Default)]
pub struct MockMetadataLookup {
    /// Movies by lowercase title.
    movies: Arc<RwLock<HashMap<String, MovieMetadata>>>,
    /// Recorded query titles.
    queries: Arc<RwLock<Vec<String>>>,
    /// If set, the next lookup will fail with this error.
    next_error: Arc<RwLock<Option<MetadataError>>>,
}

impl MockMetadataLookup {
    /// Create a new empty mock lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie the lookup can resolve.
    pub async fn add_movie(&self, movie: MovieMetadata) {
        self.movies
            .write()
            .await
            .insert(movie.title.to_lowercase(), movie);
    }

    /// Clear all movies.
    pub async fn clear_movies(&self) {
        self.movies.write().await.clear();
    }

    /// Get all recorded query titles.
    pub async fn recorded_queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }

    /// Get the number of lookups performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    /// Configure the next lookup to fail with the given error.
    pub async fn set_next_error(&self, error: MetadataError) {
        *self.next_error.write().await = Some(error);
    }

    async fn take_error(&self) -> Option<MetadataError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl MetadataLookup for MockMetadataLookup {
    async fn lookup(&self, title: &str) -> Result<MovieMetadata, MetadataError> {
        self.queries.write().await.push(title.to_string());

        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.movies
            .read()
            .await
            .get(&title.to_lowercase())
            .cloned()
            .ok_or_else(|| MetadataError::NotFound(title.to_string()))
    }
}
