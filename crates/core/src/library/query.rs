//! Read-only views over a list of movies: search, sort, filter, random pick.

use std::cmp::Ordering;

use crate::catalog::Movie;

/// Upper bound used when no end year is given.
pub const DEFAULT_YEAR_TO: i32 = 9999;

/// Case-insensitive substring search on titles.
pub fn search<'a>(movies: &'a [Movie], query: &str) -> Vec<&'a Movie> {
    let query = query.trim().to_lowercase();
    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&query))
        .collect()
}

/// Case-insensitive exact title check.
pub fn contains_title_ignore_case(movies: &[Movie], title: &str) -> bool {
    let title = title.to_lowercase();
    movies.iter().any(|m| m.title.to_lowercase() == title)
}

/// Movies by rating, highest first. Unrated movies go last; ties keep
/// storage order.
pub fn sorted_by_rating(movies: &[Movie]) -> Vec<&Movie> {
    let mut sorted: Vec<&Movie> = movies.iter().collect();
    sorted.sort_by(|a, b| match (a.rating, b.rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// Movies by year, newest first.
pub fn sorted_by_year(movies: &[Movie]) -> Vec<&Movie> {
    let mut sorted: Vec<&Movie> = movies.iter().collect();
    sorted.sort_by(|a, b| b.year.cmp(&a.year));
    sorted
}

/// Criteria for [`filter`]. Absent bounds are open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub min_rating: Option<f64>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
}

impl FilterCriteria {
    fn matches(&self, movie: &Movie) -> bool {
        let year_from = self.year_from.unwrap_or(0);
        let year_to = self.year_to.unwrap_or(DEFAULT_YEAR_TO);
        if movie.year < year_from || movie.year > year_to {
            return false;
        }

        match (self.min_rating, movie.rating) {
            (None, _) => true,
            (Some(min), Some(rating)) => rating >= min && rating <= 10.0,
            (Some(_), None) => false,
        }
    }
}

/// Movies matching every bound in `criteria`, in storage order.
pub fn filter<'a>(movies: &'a [Movie], criteria: &FilterCriteria) -> Vec<&'a Movie> {
    movies.iter().filter(|m| criteria.matches(m)).collect()
}

/// A uniformly random movie, or `None` for an empty slice.
pub fn pick_random(movies: &[Movie]) -> Option<&Movie> {
    pick_random_with(&mut fastrand::Rng::new(), movies)
}

/// Like [`pick_random`] with a caller-supplied generator.
pub fn pick_random_with<'a>(rng: &mut fastrand::Rng, movies: &'a [Movie]) -> Option<&'a Movie> {
    if movies.is_empty() {
        return None;
    }
    movies.get(rng.usize(..movies.len()))
}

/// Shorten a title for column display: titles over `max` characters keep
/// their first `max - 3` characters followed by `...`.
pub fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut short: String = title.chars().take(keep).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, year: i32, rating: Option<f64>) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            year,
            rating,
            poster_url: None,
        }
    }

    fn sample() -> Vec<Movie> {
        vec![
            movie(1, "The Matrix", 1999, Some(8.7)),
            movie(2, "Matrix Resurrections", 2021, Some(5.7)),
            movie(3, "Alien", 1979, Some(8.5)),
            movie(4, "Unrated Indie", 2015, None),
            movie(5, "Heat", 1995, Some(8.7)),
        ]
    }

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies.iter().map(|m| m.title.clone()).collect()
    }

    #[test]
    fn test_search_case_insensitive() {
        let movies = sample();
        let results = search(&movies, "MATRIX");
        assert_eq!(titles(&results), vec!["The Matrix", "Matrix Resurrections"]);
    }

    #[test]
    fn test_search_no_match() {
        let movies = sample();
        assert!(search(&movies, "godfather").is_empty());
    }

    #[test]
    fn test_contains_title_ignore_case() {
        let movies = sample();
        assert!(contains_title_ignore_case(&movies, "the matrix"));
        assert!(contains_title_ignore_case(&movies, "HEAT"));
        assert!(!contains_title_ignore_case(&movies, "matrix"));
    }

    #[test]
    fn test_sorted_by_rating() {
        let movies = sample();
        let sorted = sorted_by_rating(&movies);
        assert_eq!(
            titles(&sorted),
            vec![
                "The Matrix",
                "Heat",
                "Alien",
                "Matrix Resurrections",
                "Unrated Indie"
            ]
        );
    }

    #[test]
    fn test_sorted_by_year() {
        let movies = sample();
        let sorted = sorted_by_year(&movies);
        let years: Vec<i32> = sorted.iter().map(|m| m.year).collect();
        assert_eq!(years, vec![2021, 2015, 1999, 1995, 1979]);
    }

    #[test]
    fn test_filter_default_criteria_keeps_everything() {
        let movies = sample();
        assert_eq!(filter(&movies, &FilterCriteria::default()).len(), 5);
    }

    #[test]
    fn test_filter_min_rating_excludes_unrated() {
        let movies = sample();
        let criteria = FilterCriteria {
            min_rating: Some(8.6),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&movies, &criteria)), vec!["The Matrix", "Heat"]);
    }

    #[test]
    fn test_filter_year_range_inclusive() {
        let movies = sample();
        let criteria = FilterCriteria {
            min_rating: None,
            year_from: Some(1995),
            year_to: Some(2015),
        };
        assert_eq!(
            titles(&filter(&movies, &criteria)),
            vec!["The Matrix", "Unrated Indie", "Heat"]
        );
    }

    #[test]
    fn test_pick_random_empty() {
        assert!(pick_random(&[]).is_none());
    }

    #[test]
    fn test_pick_random_with_seed_is_member() {
        let movies = sample();
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..20 {
            let picked = pick_random_with(&mut rng, &movies).unwrap();
            assert!(movies.contains(picked));
        }
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("Alien", 40), "Alien");
        let long = "A".repeat(45);
        let short = truncate_title(&long, 40);
        assert_eq!(short.chars().count(), 40);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn test_truncate_title_multibyte() {
        let title = "Die fabelhafte Welt der Amélie – Le Fabuleux Destin";
        let short = truncate_title(title, 20);
        assert_eq!(short, "Die fabelhafte We...");
    }
}
