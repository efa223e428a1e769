use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::metadata::OmdbConfig;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("movies.db")
}

/// HTML export configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Where the generated page is written (default: index.html)
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    /// Image shown for movies without a poster
    #[serde(default = "default_placeholder_poster")]
    pub placeholder_poster: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            placeholder_poster: default_placeholder_poster(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_placeholder_poster() -> String {
    "placeholder.jpg".to_string()
}

/// Sanitized config for display (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub database: DatabaseConfig,
    pub omdb: SanitizedOmdbConfig,
    pub export: ExportConfig,
}

/// Sanitized OMDb config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedOmdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub api_key_configured: bool,
    pub timeout_secs: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            database: config.database.clone(),
            omdb: SanitizedOmdbConfig {
                base_url: config.omdb.base_url.clone(),
                api_key_configured: !config.omdb.api_key.is_empty(),
                timeout_secs: config.omdb.timeout_secs,
            },
            export: config.export.clone(),
        }
    }
}
