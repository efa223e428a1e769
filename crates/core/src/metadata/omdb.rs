//! OMDb (Open Movie Database) API client.
//!
//! OMDb requires an API key for access. Lookups use the exact-title endpoint
//! (`?t=`), which returns at most one movie.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{non_placeholder, parse_rating, parse_year, MovieMetadata};
use super::{MetadataError, MetadataLookup};

/// OMDb API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// OMDb API key (required for lookups).
    #[serde(default)]
    pub api_key: String,
    /// Base URL (default: https://www.omdbapi.com/).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 5).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb API client.
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: OmdbConfig) -> Result<Self, MetadataError> {
        if config.api_key.is_empty() {
            return Err(MetadataError::NotConfigured(
                "OMDb API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl MetadataLookup for OmdbClient {
    async fn lookup(&self, title: &str) -> Result<MovieMetadata, MetadataError> {
        debug!("OMDb lookup: title='{}'", title);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if status == 401 {
            return Err(MetadataError::NotConfigured(
                "Invalid OMDb API key".to_string(),
            ));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetadataError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: OmdbResponse = serde_json::from_str(&body).map_err(|e| {
            MetadataError::MalformedResponse(format!("Failed to parse OMDb response: {}", e))
        })?;

        parsed.into_metadata(title)
    }
}

// ============================================================================
// OMDb API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbResponse {
    fn into_metadata(self, queried_title: &str) -> Result<MovieMetadata, MetadataError> {
        if self.response.eq_ignore_ascii_case("false") {
            debug!(
                "OMDb returned no match for '{}': {}",
                queried_title,
                self.error.as_deref().unwrap_or("no error message")
            );
            return Err(MetadataError::NotFound(queried_title.to_string()));
        }

        let title = non_placeholder(self.title).unwrap_or_else(|| queried_title.to_string());

        Ok(MovieMetadata {
            title,
            year: self.year.as_deref().map(parse_year).unwrap_or(0),
            rating: parse_rating(self.imdb_rating.as_deref()),
            poster_url: non_placeholder(self.poster),
        })
    }
}
