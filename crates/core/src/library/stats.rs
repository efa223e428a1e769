//! Rating statistics over the catalog.

use serde::Serialize;

use crate::catalog::Movie;

/// Summary of ratings across rated movies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStatistics {
    /// Number of movies in the input, rated or not.
    pub total_movies: usize,
    /// Number of movies with a rating.
    pub rated_movies: usize,
    pub average_rating: f64,
    pub median_rating: f64,
    pub max_rating: f64,
    pub min_rating: f64,
    /// Every title sharing the highest rating, in storage order.
    pub best: Vec<String>,
    /// Every title sharing the lowest rating, in storage order.
    pub worst: Vec<String>,
}

/// Compute statistics over rated movies. `None` when no movie has a rating.
pub fn statistics(movies: &[Movie]) -> Option<CatalogStatistics> {
    let mut ratings: Vec<f64> = movies.iter().filter_map(|m| m.rating).collect();
    if ratings.is_empty() {
        return None;
    }

    ratings.sort_by(f64::total_cmp);
    let count = ratings.len();

    let average_rating = ratings.iter().sum::<f64>() / count as f64;
    let median_rating = if count % 2 == 1 {
        ratings[count / 2]
    } else {
        (ratings[count / 2 - 1] + ratings[count / 2]) / 2.0
    };
    let min_rating = ratings[0];
    let max_rating = ratings[count - 1];

    let titles_with = |target: f64| -> Vec<String> {
        movies
            .iter()
            .filter(|m| m.rating == Some(target))
            .map(|m| m.title.clone())
            .collect()
    };

    Some(CatalogStatistics {
        total_movies: movies.len(),
        rated_movies: count,
        average_rating,
        median_rating,
        max_rating,
        min_rating,
        best: titles_with(max_rating),
        worst: titles_with(min_rating),
    })
}
