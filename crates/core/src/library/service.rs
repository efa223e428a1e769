//! Library service: the catalog plus the metadata lookup used to add movies.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::{CatalogError, Movie, MovieCatalog, NewMovie};
use crate::metadata::{MetadataError, MetadataLookup, MovieMetadata};

use super::query::contains_title_ignore_case;
use super::validate::{validate_rating, validate_title};

/// Errors from the add-movie flow.
#[derive(Debug, Error)]
pub enum AddError {
    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] MetadataError),

    #[error("Movie '{0}' already exists in the catalog")]
    AlreadyExists(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A looked-up movie not yet stored.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCandidate {
    pub title: String,
    pub year: i32,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
}

impl MovieCandidate {
    /// True when the caller must supply a rating before storing. A zero
    /// rating from the API means "no votes" and counts as missing, as does
    /// one outside 0-10.
    pub fn needs_rating(&self) -> bool {
        !matches!(self.rating, Some(r) if r > 0.0 && validate_rating(r).is_ok())
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn into_new_movie(self) -> NewMovie {
        NewMovie {
            title: self.title,
            year: self.year,
            rating: self.rating,
            poster_url: self.poster_url,
        }
    }
}

impl From<MovieMetadata> for MovieCandidate {
    fn from(m: MovieMetadata) -> Self {
        Self {
            title: m.title,
            year: m.year,
            rating: m.rating,
            poster_url: m.poster_url,
        }
    }
}

/// Catalog and metadata lookup, constructed once and handed to callers.
pub struct MovieLibrary {
    catalog: Arc<dyn MovieCatalog>,
    lookup: Option<Arc<dyn MetadataLookup>>,
}

impl MovieLibrary {
    pub fn new(catalog: Arc<dyn MovieCatalog>, lookup: Option<Arc<dyn MetadataLookup>>) -> Self {
        Self { catalog, lookup }
    }

    pub fn catalog(&self) -> &dyn MovieCatalog {
        self.catalog.as_ref()
    }

    /// Check if a metadata lookup is available.
    pub fn has_lookup(&self) -> bool {
        self.lookup.is_some()
    }

    /// Validate the title, look it up and reject case-insensitive duplicates.
    ///
    /// Nothing is written; a failed lookup leaves the catalog untouched.
    pub async fn prepare_add(&self, raw_title: &str) -> Result<MovieCandidate, AddError> {
        let title = validate_title(raw_title).map_err(|e| match e {
            CatalogError::InvalidInput(msg) => AddError::InvalidTitle(msg),
            other => AddError::Catalog(other),
        })?;

        let lookup = self.lookup.as_ref().ok_or_else(|| {
            MetadataError::NotConfigured("no OMDb API key configured".to_string())
        })?;

        let metadata = lookup
            .lookup(&title)
            .await
            .inspect_err(|e| warn!("Metadata lookup for '{}' failed: {}", title, e))?;
        debug!("Lookup '{}' resolved to '{}' ({})", title, metadata.title, metadata.year);

        let existing = self.catalog.movies()?;
        if contains_title_ignore_case(&existing, &metadata.title) {
            return Err(AddError::AlreadyExists(metadata.title));
        }

        Ok(metadata.into())
    }

    /// Store a prepared candidate. A rating outside 0-10 is rejected before
    /// the catalog is touched.
    pub fn complete_add(&self, candidate: MovieCandidate) -> Result<Movie, AddError> {
        if let Some(rating) = candidate.rating {
            validate_rating(rating).map_err(|e| match e {
                CatalogError::InvalidInput(msg) => AddError::InvalidRating(msg),
                other => AddError::Catalog(other),
            })?;
        }
        let movie = self.catalog.add(candidate.into_new_movie())?;
        info!("Added movie '{}' ({})", movie.title, movie.year);
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SqliteMovieCatalog;
    use crate::testing::{fixtures, MockMetadataLookup};

    fn library_with(lookup: Arc<MockMetadataLookup>) -> MovieLibrary {
        let catalog = Arc::new(SqliteMovieCatalog::in_memory().unwrap());
        MovieLibrary::new(catalog, Some(lookup))
    }

    #[test]
    fn test_needs_rating() {
        let candidate: MovieCandidate = fixtures::movie_metadata("Heat", 1995, Some(8.3)).into();
        assert!(!candidate.needs_rating());
        assert!(candidate.clone().with_rating(0.0).needs_rating());

        let unrated: MovieCandidate = fixtures::movie_metadata("Heat", 1995, None).into();
        assert!(unrated.needs_rating());

        assert!(candidate.clone().with_rating(11.5).needs_rating());
        assert!(candidate.clone().with_rating(-3.0).needs_rating());
        assert!(!candidate.with_rating(10.0).needs_rating());
    }

    #[test]
    fn test_complete_add_rejects_out_of_range_rating() {
        let library = library_with(Arc::new(MockMetadataLookup::new()));
        let candidate: MovieCandidate = fixtures::movie_metadata("Heat", 1995, Some(11.5)).into();

        let result = library.complete_add(candidate);
        assert!(matches!(result, Err(AddError::InvalidRating(_))));
        assert!(library.catalog().list_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prepare_and_complete_add() {
        let lookup = Arc::new(MockMetadataLookup::new());
        lookup
            .add_movie(fixtures::movie_metadata("Inception", 2010, Some(8.8)))
            .await;
        let library = library_with(lookup.clone());

        let candidate = library.prepare_add("  inception ").await.unwrap();
        assert_eq!(candidate.title, "Inception");
        assert_eq!(lookup.recorded_queries().await, vec!["inception"]);

        let movie = library.complete_add(candidate).unwrap();
        assert_eq!(movie.year, 2010);
        assert_eq!(library.catalog().get("Inception").unwrap().rating, Some(8.8));
    }

    #[tokio::test]
    async fn test_prepare_add_rejects_duplicate_ignoring_case() {
        let lookup = Arc::new(MockMetadataLookup::new());
        lookup
            .add_movie(fixtures::movie_metadata("Inception", 2010, Some(8.8)))
            .await;
        let library = library_with(lookup);
        library
            .catalog()
            .add(NewMovie::new("INCEPTION", 2010))
            .unwrap();

        let result = library.prepare_add("inception").await;
        assert!(matches!(result, Err(AddError::AlreadyExists(t)) if t == "Inception"));
    }

    #[tokio::test]
    async fn test_prepare_add_invalid_title_skips_lookup() {
        let lookup = Arc::new(MockMetadataLookup::new());
        let library = library_with(lookup.clone());

        let result = library.prepare_add("   ").await;
        assert!(matches!(result, Err(AddError::InvalidTitle(_))));
        assert_eq!(lookup.query_count().await, 0);
    }

    #[tokio::test]
    async fn test_failed_lookup_leaves_catalog_unchanged() {
        let lookup = Arc::new(MockMetadataLookup::new());
        lookup.set_next_error(MetadataError::Timeout).await;
        let library = library_with(lookup);

        let result = library.prepare_add("Inception").await;
        assert!(matches!(
            result,
            Err(AddError::Lookup(MetadataError::Timeout))
        ));
        assert!(library.catalog().list_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_prepare_add_without_lookup() {
        let catalog = Arc::new(SqliteMovieCatalog::in_memory().unwrap());
        let library = MovieLibrary::new(catalog, None);
        assert!(!library.has_lookup());

        let result = library.prepare_add("Inception").await;
        assert!(matches!(
            result,
            Err(AddError::Lookup(MetadataError::NotConfigured(_)))
        ));
    }
}
