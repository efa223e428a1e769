//! Text rendering for movie lists and reports.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

use moviedb_core::library::truncate_title;
use moviedb_core::{CatalogStatistics, Movie};

/// Column width for titles in tables.
pub const MAX_TITLE_LENGTH: usize = 40;

/// Rating with one decimal, `-` when unrated.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => "-".to_string(),
    }
}

/// Title / Year / Rating table.
pub fn movie_table<'a>(movies: impl IntoIterator<Item = &'a Movie>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "Year", "Rating"]);

    for movie in movies {
        table.add_row(vec![
            Cell::new(truncate_title(&movie.title, MAX_TITLE_LENGTH)),
            Cell::new(movie.year).set_alignment(CellAlignment::Right),
            Cell::new(format_rating(movie.rating)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn stats_report(stats: &CatalogStatistics) -> String {
    let mut lines = vec![
        "Movie Statistics".bold().to_string(),
        "-".repeat(MAX_TITLE_LENGTH),
        format!("Average rating : {:.1}", stats.average_rating),
        format!("Median rating  : {:.1}", stats.median_rating),
        format!(
            "Best movie(s)  : {} ({:.1})",
            stats.best.join(", "),
            stats.max_rating
        ),
        format!(
            "Worst movie(s) : {} ({:.1})",
            stats.worst.join(", "),
            stats.min_rating
        ),
    ];
    if stats.rated_movies < stats.total_movies {
        lines.push(format!(
            "{} of {} movies are unrated",
            stats.total_movies - stats.rated_movies,
            stats.total_movies
        ));
    }
    lines.join("\n")
}

pub fn recommendation(movie: &Movie) -> String {
    [
        "Movie Recommendation".bold().to_string(),
        "-".repeat(MAX_TITLE_LENGTH),
        format!("Title  : {}", movie.title),
        format!("Rating : {}", format_rating(movie.rating)),
        format!("Year   : {}", movie.year),
    ]
    .join("\n")
}

pub fn success(message: &str) -> String {
    message.green().to_string()
}

pub fn warning(message: &str) -> String {
    message.yellow().to_string()
}

pub fn failure(message: &str) -> String {
    message.red().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviedb_core::testing::fixtures;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(8.75)), "8.8");
        assert_eq!(format_rating(Some(7.0)), "7.0");
        assert_eq!(format_rating(None), "-");
    }

    #[test]
    fn test_movie_table_truncates_long_titles() {
        let long = "A Very Long Movie Title That Goes On And On Forever";
        let movies = vec![
            fixtures::movie(1, long, 2001, Some(6.5)),
            fixtures::movie(2, "Heat", 1995, None),
        ];

        let rendered = movie_table(&movies).to_string();
        assert!(rendered.contains("A Very Long Movie Title That Goes On ..."));
        assert!(!rendered.contains(long));
        assert!(rendered.contains("Heat"));
        assert!(rendered.contains("6.5"));
    }

    #[test]
    fn test_stats_report_mentions_unrated() {
        let stats = CatalogStatistics {
            total_movies: 3,
            rated_movies: 2,
            average_rating: 7.5,
            median_rating: 7.5,
            max_rating: 8.0,
            min_rating: 7.0,
            best: vec!["Heat".to_string()],
            worst: vec!["Alien".to_string()],
        };

        let report = stats_report(&stats);
        assert!(report.contains("Best movie(s)  : Heat (8.0)"));
        assert!(report.contains("Worst movie(s) : Alien (7.0)"));
        assert!(report.contains("1 of 3 movies are unrated"));
    }
}
