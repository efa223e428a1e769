//! Types for metadata lookup results.

use serde::{Deserialize, Serialize};

/// Metadata for one movie as reported by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieMetadata {
    /// Canonical title.
    pub title: String,
    /// Release year, 0 when the API gave none.
    pub year: i32,
    /// Rating (0-10), if the API has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Poster URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

/// Parse a year field such as `"2010"` or `"2010–2013"`.
///
/// Series report a range; the first year is used. Returns 0 when nothing
/// parseable is present.
pub(crate) fn parse_year(raw: &str) -> i32 {
    raw.split(['–', '-'])
        .next()
        .and_then(|y| y.trim().parse().ok())
        .unwrap_or(0)
}

/// Parse a rating field, treating `"N/A"` and garbage as absent.
pub(crate) fn parse_rating(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|r| !r.is_empty() && *r != "N/A")
        .and_then(|r| r.parse().ok())
}

/// Normalize an optional text field, treating `"N/A"` and empty as absent.
pub(crate) fn non_placeholder(raw: Option<String>) -> Option<String> {
    raw.filter(|s| {
        let s = s.trim();
        !s.is_empty() && s != "N/A"
    })
}
