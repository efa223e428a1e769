//! Types for the movie catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Surrogate key, assigned once on insert.
    pub id: i64,
    /// Unique, case-sensitive title.
    pub title: String,
    /// Release year (0 when unknown).
    pub year: i32,
    /// Rating on a 0-10 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Poster image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

impl Movie {
    /// The attributes of this record without its key and title.
    pub fn entry(&self) -> MovieEntry {
        MovieEntry {
            year: self.year,
            rating: self.rating,
            poster_url: self.poster_url.clone(),
        }
    }
}

/// Attributes of a movie as returned by [`super::MovieCatalog::list_all`],
/// keyed by title in the surrounding map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub year: i32,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
}

/// Request to add a new movie.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
}

impl NewMovie {
    /// A movie with only title and year set.
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            year,
            rating: None,
            poster_url: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_poster_url(mut self, poster_url: impl Into<String>) -> Self {
        self.poster_url = Some(poster_url.into());
        self
    }
}

/// Partial update of an existing movie. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieUpdate {
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
}

impl MovieUpdate {
    pub fn rating(rating: f64) -> Self {
        Self {
            rating: Some(rating),
            poster_url: None,
        }
    }

    pub fn poster_url(poster_url: impl Into<String>) -> Self {
        Self {
            rating: None,
            poster_url: Some(poster_url.into()),
        }
    }

    /// True when neither field would change.
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.poster_url.is_none()
    }
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Movie '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Movie '{0}' not found")]
    NotFound(String),

    #[error("Nothing to update: provide a rating or a poster URL")]
    NoOp,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    /// True for engine or connectivity failures, false for expected
    /// business conditions such as a missing or duplicate title.
    pub fn is_fault(&self) -> bool {
        matches!(self, CatalogError::Storage(_))
    }
}

impl From<rusqlite::Error> for CatalogError {
    fn from(e: rusqlite::Error) -> Self {
        CatalogError::Storage(e.to_string())
    }
}
