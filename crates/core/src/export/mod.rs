//! Static HTML export of the catalog.
//!
//! The page is a fixed template with one placeholder for the movie grid. The
//! export only reads from the catalog.

mod html;

pub use html::{escape_html, render_html, GRID_PLACEHOLDER, PAGE_TEMPLATE};

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::catalog::{CatalogError, MovieCatalog};
use crate::config::ExportConfig;

/// Errors for export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to read catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a successful export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub movie_count: usize,
    pub generated_at: DateTime<Utc>,
}

/// Render the catalog and write the page to `config.output_path`.
pub fn export_html(
    catalog: &dyn MovieCatalog,
    config: &ExportConfig,
) -> Result<ExportSummary, ExportError> {
    let movies = catalog.movies()?;
    let page = render_html(&movies, &config.placeholder_poster);

    write_page(&config.output_path, &page)?;
    info!(
        "Exported {} movies to {:?}",
        movies.len(),
        config.output_path
    );

    Ok(ExportSummary {
        path: config.output_path.clone(),
        movie_count: movies.len(),
        generated_at: Utc::now(),
    })
}

fn write_page(path: &Path, page: &str) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, page).map_err(io_err)
}
