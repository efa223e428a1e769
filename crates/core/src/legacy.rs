//! Import of the older `movies.json` storage format.
//!
//! That format is a JSON array of `{"Title", "Rating", "Year"}` objects.
//! Entries are added through the regular catalog API, so titles that already
//! exist are skipped rather than overwritten.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::{CatalogError, MovieCatalog, NewMovie};
use crate::library::validate_rating;

/// Errors for legacy import.
#[derive(Debug, Error)]
pub enum LegacyImportError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse legacy movie file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// One movie as stored by the JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyMovie {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Rating", default)]
    pub rating: Option<f64>,
    #[serde(rename = "Year", default)]
    pub year: Option<i32>,
}

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    /// Titles already present in the catalog.
    pub duplicates: Vec<String>,
    /// Entries rejected before reaching the catalog (blank title or a
    /// rating outside 0-10).
    pub invalid: usize,
}

/// Read a legacy file. A missing file yields an empty list.
pub fn load_legacy_file(path: &Path) -> Result<Vec<LegacyMovie>, LegacyImportError> {
    if !path.exists() {
        debug!("Legacy file {:?} not found, nothing to import", path);
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| LegacyImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_legacy(&raw)
}

/// Parse legacy JSON text.
pub fn parse_legacy(raw: &str) -> Result<Vec<LegacyMovie>, LegacyImportError> {
    Ok(serde_json::from_str(raw)?)
}

/// Add every entry to the catalog. Duplicates, blank titles and out-of-range
/// ratings are counted and skipped; storage faults abort the import.
pub fn import_legacy(
    catalog: &dyn MovieCatalog,
    entries: Vec<LegacyMovie>,
) -> Result<ImportReport, LegacyImportError> {
    let mut report = ImportReport::default();

    for entry in entries {
        let title = entry.title.trim().to_string();
        if title.is_empty() {
            report.invalid += 1;
            continue;
        }

        let rating = match entry.rating.map(validate_rating).transpose() {
            Ok(rating) => rating,
            Err(e) => {
                warn!("Skipping legacy movie '{}': {}", title, e);
                report.invalid += 1;
                continue;
            }
        };

        let movie = NewMovie {
            title: title.clone(),
            year: entry.year.unwrap_or(0),
            rating,
            poster_url: None,
        };

        match catalog.add(movie) {
            Ok(_) => report.imported += 1,
            Err(CatalogError::DuplicateTitle(t)) => {
                warn!("Skipping legacy movie '{}': already in catalog", t);
                report.duplicates.push(t);
            }
            Err(CatalogError::InvalidInput(msg)) => {
                warn!("Skipping legacy movie '{}': {}", title, msg);
                report.invalid += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        "Legacy import: {} imported, {} duplicates, {} invalid",
        report.imported,
        report.duplicates.len(),
        report.invalid
    );
    Ok(report)
}
