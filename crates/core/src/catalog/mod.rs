//! Movie catalog - the persistent set of movies the user keeps.
//!
//! Titles are the external key and are matched case-sensitively. Callers that
//! need case-insensitive semantics normalize before calling.

mod sqlite;
mod types;

pub use sqlite::SqliteMovieCatalog;
pub use types::*;

use std::collections::HashMap;

/// Trait for movie catalog storage.
pub trait MovieCatalog: Send + Sync {
    /// All movies keyed by title.
    ///
    /// Returns an empty map when the catalog is empty. Storage faults are
    /// returned as errors, never reported as an empty catalog.
    fn list_all(&self) -> Result<HashMap<String, MovieEntry>, CatalogError>;

    /// All movies in storage order.
    fn movies(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Get a movie by exact title.
    fn get(&self, title: &str) -> Result<Movie, CatalogError>;

    /// Add a new movie.
    ///
    /// Fails with `InvalidInput` on a blank title and with `DuplicateTitle`
    /// if the exact title is already stored.
    fn add(&self, movie: NewMovie) -> Result<Movie, CatalogError>;

    /// Delete a movie by exact title.
    fn delete(&self, title: &str) -> Result<(), CatalogError>;

    /// Change the rating and/or poster URL of a movie.
    ///
    /// Fails with `NoOp` when the update carries no field, before storage is
    /// touched.
    fn update(&self, title: &str, update: MovieUpdate) -> Result<(), CatalogError>;
}
