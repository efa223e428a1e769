//! Validation of user-supplied fields before they reach the catalog.

use crate::catalog::CatalogError;

/// Lowest accepted rating.
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;

/// Trim a title and require at least one letter or digit.
pub fn validate_title(raw: &str) -> Result<String, CatalogError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(CatalogError::InvalidInput(
            "movie title cannot be blank".to_string(),
        ));
    }
    if !title.chars().any(char::is_alphanumeric) {
        return Err(CatalogError::InvalidInput(
            "title must contain at least one letter or number".to_string(),
        ));
    }
    Ok(title.to_string())
}

/// Require a finite rating within [0, 10].
pub fn validate_rating(rating: f64) -> Result<f64, CatalogError> {
    if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CatalogError::InvalidInput(format!(
            "rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }
    Ok(rating)
}

/// Parse a rating typed by the user.
pub fn parse_rating(raw: &str) -> Result<f64, CatalogError> {
    let rating: f64 = raw.trim().parse().map_err(|_| {
        CatalogError::InvalidInput(format!("'{}' is not a number", raw.trim()))
    })?;
    validate_rating(rating)
}
