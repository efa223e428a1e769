//! SQLite-backed movie catalog implementation.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, ErrorCode};
use tracing::debug;

use super::{CatalogError, Movie, MovieCatalog, MovieEntry, MovieUpdate, NewMovie};

/// SQLite-backed movie catalog.
pub struct SqliteMovieCatalog {
    conn: Mutex<Connection>,
}

impl SqliteMovieCatalog {
    /// Open the catalog at `path`, creating the database file and table if needed.
    pub fn new(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path)?;
        Self::initialize_schema(&conn)?;
        debug!("Opened movie catalog at {:?}", path);
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory catalog (useful for testing).
    pub fn in_memory() -> Result<Self, CatalogError> {
        let conn = Connection::open_in_memory()?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CatalogError> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS movies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT UNIQUE NOT NULL,
                year INTEGER NOT NULL,
                rating REAL,
                poster_url TEXT
            );
            "#,
        )?;

        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, CatalogError> {
        self.conn
            .lock()
            .map_err(|_| CatalogError::Storage("catalog connection lock poisoned".to_string()))
    }

    fn row_to_movie(row: &rusqlite::Row) -> rusqlite::Result<Movie> {
        Ok(Movie {
            id: row.get(0)?,
            title: row.get(1)?,
            year: row.get(2)?,
            rating: row.get(3)?,
            poster_url: row.get(4)?,
        })
    }

    fn load_movies(conn: &Connection) -> Result<Vec<Movie>, CatalogError> {
        let mut stmt =
            conn.prepare("SELECT id, title, year, rating, poster_url FROM movies ORDER BY id")?;

        let rows = stmt.query_map([], Self::row_to_movie)?;

        let mut movies = Vec::new();
        for row in rows {
            movies.push(row?);
        }
        Ok(movies)
    }
}

impl MovieCatalog for SqliteMovieCatalog {
    fn list_all(&self) -> Result<HashMap<String, MovieEntry>, CatalogError> {
        let conn = self.conn()?;
        let movies = Self::load_movies(&conn)?;

        Ok(movies
            .into_iter()
            .map(|m| {
                let entry = m.entry();
                (m.title, entry)
            })
            .collect())
    }

    fn movies(&self) -> Result<Vec<Movie>, CatalogError> {
        let conn = self.conn()?;
        Self::load_movies(&conn)
    }

    fn get(&self, title: &str) -> Result<Movie, CatalogError> {
        let conn = self.conn()?;

        conn.query_row(
            "SELECT id, title, year, rating, poster_url FROM movies WHERE title = ?",
            params![title],
            Self::row_to_movie,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => CatalogError::NotFound(title.to_string()),
            _ => CatalogError::from(e),
        })
    }

    fn add(&self, movie: NewMovie) -> Result<Movie, CatalogError> {
        if movie.title.trim().is_empty() {
            return Err(CatalogError::InvalidInput(
                "movie title cannot be empty".to_string(),
            ));
        }

        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO movies (title, year, rating, poster_url) VALUES (?, ?, ?, ?)",
            params![&movie.title, movie.year, movie.rating, &movie.poster_url],
        )
        .map_err(|e| match e.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => {
                CatalogError::DuplicateTitle(movie.title.clone())
            }
            _ => CatalogError::from(e),
        })?;

        let id = conn.last_insert_rowid();
        debug!("Added movie '{}' with id {}", movie.title, id);

        Ok(Movie {
            id,
            title: movie.title,
            year: movie.year,
            rating: movie.rating,
            poster_url: movie.poster_url,
        })
    }

    fn delete(&self, title: &str) -> Result<(), CatalogError> {
        let conn = self.conn()?;

        let rows_affected = conn.execute("DELETE FROM movies WHERE title = ?", params![title])?;

        if rows_affected == 0 {
            return Err(CatalogError::NotFound(title.to_string()));
        }

        debug!("Deleted movie '{}'", title);
        Ok(())
    }

    fn update(&self, title: &str, update: MovieUpdate) -> Result<(), CatalogError> {
        let conn = self.conn()?;

        let rows_affected = match (update.rating, update.poster_url) {
            (None, None) => return Err(CatalogError::NoOp),
            (Some(rating), Some(poster_url)) => conn.execute(
                "UPDATE movies SET rating = ?, poster_url = ? WHERE title = ?",
                params![rating, poster_url, title],
            )?,
            (Some(rating), None) => conn.execute(
                "UPDATE movies SET rating = ? WHERE title = ?",
                params![rating, title],
            )?,
            (None, Some(poster_url)) => conn.execute(
                "UPDATE movies SET poster_url = ? WHERE title = ?",
                params![poster_url, title],
            )?,
        };

        if rows_affected == 0 {
            return Err(CatalogError::NotFound(title.to_string()));
        }

        debug!("Updated movie '{}'", title);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> SqliteMovieCatalog {
        SqliteMovieCatalog::in_memory().unwrap()
    }

    fn inception() -> NewMovie {
        NewMovie::new("Inception", 2010)
            .with_rating(8.8)
            .with_poster_url("http://x/p.jpg")
    }

    #[test]
    fn test_add_then_list_round_trip() {
        let catalog = create_test_catalog();
        catalog.add(inception()).unwrap();

        let all = catalog.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(
            all["Inception"],
            MovieEntry {
                year: 2010,
                rating: Some(8.8),
                poster_url: Some("http://x/p.jpg".to_string()),
            }
        );
    }

    #[test]
    fn test_add_returns_assigned_id() {
        let catalog = create_test_catalog();
        let first = catalog.add(NewMovie::new("Alien", 1979)).unwrap();
        let second = catalog.add(NewMovie::new("Aliens", 1986)).unwrap();

        assert!(second.id > first.id);
        assert_eq!(catalog.get("Alien").unwrap().id, first.id);
    }

    #[test]
    fn test_add_without_optional_fields() {
        let catalog = create_test_catalog();
        catalog.add(NewMovie::new("Alien", 1979)).unwrap();

        let movie = catalog.get("Alien").unwrap();
        assert_eq!(movie.year, 1979);
        assert!(movie.rating.is_none());
        assert!(movie.poster_url.is_none());
    }

    #[test]
    fn test_add_duplicate_title_fails() {
        let catalog = create_test_catalog();
        catalog.add(inception()).unwrap();

        let result = catalog.add(NewMovie::new("Inception", 1999).with_rating(1.0));
        assert!(matches!(result, Err(CatalogError::DuplicateTitle(t)) if t == "Inception"));

        // Pre-existing record untouched
        let movie = catalog.get("Inception").unwrap();
        assert_eq!(movie.year, 2010);
        assert_eq!(movie.rating, Some(8.8));
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let catalog = create_test_catalog();
        catalog.add(inception()).unwrap();

        catalog.add(NewMovie::new("inception", 2010)).unwrap();
        assert_eq!(catalog.list_all().unwrap().len(), 2);
        assert!(matches!(
            catalog.get("INCEPTION"),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn test_add_blank_title_fails() {
        let catalog = create_test_catalog();

        let result = catalog.add(NewMovie::new("   ", 2000));
        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
        assert!(catalog.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete() {
        let catalog = create_test_catalog();
        catalog.add(inception()).unwrap();

        catalog.delete("Inception").unwrap();

        assert!(catalog.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_nonexistent() {
        let catalog = create_test_catalog();
        catalog.add(inception()).unwrap();

        let result = catalog.delete("Interstellar");
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
        assert_eq!(catalog.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_requires_exact_case() {
        let catalog = create_test_catalog();
        catalog.add(inception()).unwrap();

        let result = catalog.delete("inception");
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_update_rating_only() {
        let catalog = create_test_catalog();
        catalog.add(inception()).unwrap();

        catalog
            .update("Inception", MovieUpdate::rating(9.1))
            .unwrap();

        let movie = catalog.get("Inception").unwrap();
        assert_eq!(movie.rating, Some(9.1));
        assert_eq!(movie.poster_url.as_deref(), Some("http://x/p.jpg"));
    }

    #[test]
    fn test_update_poster_only() {
        let catalog = create_test_catalog();
        catalog.add(inception()).unwrap();

        catalog
            .update("Inception", MovieUpdate::poster_url("http://y/q.jpg"))
            .unwrap();

        let movie = catalog.get("Inception").unwrap();
        assert_eq!(movie.rating, Some(8.8));
        assert_eq!(movie.poster_url.as_deref(), Some("http://y/q.jpg"));
    }

    #[test]
    fn test_update_both_fields() {
        let catalog = create_test_catalog();
        catalog.add(inception()).unwrap();

        catalog
            .update(
                "Inception",
                MovieUpdate {
                    rating: Some(7.5),
                    poster_url: Some("http://y/q.jpg".to_string()),
                },
            )
            .unwrap();

        let movie = catalog.get("Inception").unwrap();
        assert_eq!(movie.rating, Some(7.5));
        assert_eq!(movie.poster_url.as_deref(), Some("http://y/q.jpg"));
        assert_eq!(movie.year, 2010);
    }

    #[test]
    fn test_update_without_fields_is_noop() {
        let catalog = create_test_catalog();
        catalog.add(inception()).unwrap();

        let result = catalog.update("Inception", MovieUpdate::default());
        assert!(matches!(result, Err(CatalogError::NoOp)));

        let movie = catalog.get("Inception").unwrap();
        assert_eq!(movie.rating, Some(8.8));
        assert_eq!(movie.poster_url.as_deref(), Some("http://x/p.jpg"));
    }

    #[test]
    fn test_update_nonexistent() {
        let catalog = create_test_catalog();

        let result = catalog.update("Inception", MovieUpdate::rating(5.0));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_movies_in_insertion_order() {
        let catalog = create_test_catalog();
        for (title, year) in [("Zodiac", 2007), ("Alien", 1979), ("Memento", 2000)] {
            catalog.add(NewMovie::new(title, year)).unwrap();
        }

        let titles: Vec<String> = catalog
            .movies()
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Zodiac", "Alien", "Memento"]);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let catalog = create_test_catalog();
        let first = catalog.add(NewMovie::new("Alien", 1979)).unwrap();
        catalog.delete("Alien").unwrap();

        let second = catalog.add(NewMovie::new("Alien", 1979)).unwrap();
        assert!(second.id > first.id);
    }
}
