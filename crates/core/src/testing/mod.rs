//! Testing utilities and mock implementations.
//!
//! Provides a mock metadata lookup so the add flow can be exercised without
//! network access, plus fixtures for common records.
//!
//! # Example
//!
//! ```rust,ignore
//! use moviedb_core::testing::{fixtures, MockMetadataLookup};
//!
//! let lookup = MockMetadataLookup::new();
//! lookup.add_movie(fixtures::movie_metadata("Heat", 1995, Some(8.3))).await;
//!
//! let metadata = lookup.lookup("heat").await?;
//! assert_eq!(metadata.year, 1995);
//! ```

mod mock_metadata_lookup;

pub use mock_metadata_lookup::MockMetadataLookup;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{Movie, NewMovie};
    use crate::metadata::MovieMetadata;

    /// Metadata as the lookup would report it, with a poster derived from the title.
    pub fn movie_metadata(title: &str, year: i32, rating: Option<f64>) -> MovieMetadata {
        MovieMetadata {
            title: title.to_string(),
            year,
            rating,
            poster_url: Some(poster_url(title)),
        }
    }

    /// A new movie with rating and poster set.
    pub fn new_movie(title: &str, year: i32, rating: f64) -> NewMovie {
        NewMovie::new(title, year)
            .with_rating(rating)
            .with_poster_url(poster_url(title))
    }

    /// A stored movie record.
    pub fn movie(id: i64, title: &str, year: i32, rating: Option<f64>) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            year,
            rating,
            poster_url: Some(poster_url(title)),
        }
    }

    fn poster_url(title: &str) -> String {
        format!(
            "https://img.example.com/{}.jpg",
            title.to_lowercase().replace(' ', "-")
        )
    }
}
