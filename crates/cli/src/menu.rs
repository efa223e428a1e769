//! Interactive menu loop.
//!
//! Reads choices and answers from any `BufRead` and writes to any `Write`, so
//! the loop runs the same against a terminal or a scripted buffer.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::{debug, error};

use moviedb_core::library::{self, FilterCriteria};
use moviedb_core::{
    export_html, AddError, CatalogError, ExportConfig, MovieCandidate, MovieLibrary, MovieUpdate,
};

use crate::render;

const MENU: &str = "
********** My Movie Database **********

Menu:
0.  Exit
1.  List movies
2.  Add movie
3.  Delete movie
4.  Update movie rating
5.  Stats
6.  Random movie
7.  Search movies
8.  Movies sorted by rating
9.  Movies sorted by year
10. Filter movies
11. Generate website
12. Update movie poster
";

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, R, W> {
    library: &'a MovieLibrary,
    export: ExportConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(library: &'a MovieLibrary, export: ExportConfig, input: R, output: W) -> Self {
        Self {
            library,
            export,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter choice (0-12): ")? else {
                break;
            };
            writeln!(self.output)?;

            match self.dispatch(&choice).await {
                Ok(Flow::Exit) => {
                    writeln!(self.output, "Bye!")?;
                    break;
                }
                Ok(Flow::Continue) => {}
                Err(e) => {
                    error!("Menu action {} failed: {:#}", choice, e);
                    let message = format!("Error: {:#}", e);
                    writeln!(self.output, "{}", render::failure(&message))?;
                }
            }

            writeln!(self.output)?;
            if self.prompt("Press enter to continue...")?.is_none() {
                break;
            }
        }
        Ok(())
    }

    async fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        debug!("Menu choice: {}", choice);
        match choice {
            "0" => return Ok(Flow::Exit),
            "1" => self.list_movies()?,
            "2" => self.add_movie().await?,
            "3" => self.delete_movie()?,
            "4" => self.update_rating()?,
            "5" => self.show_stats()?,
            "6" => self.random_movie()?,
            "7" => self.search_movies()?,
            "8" => self.sort_by_rating()?,
            "9" => self.sort_by_year()?,
            "10" => self.filter_movies()?,
            "11" => self.generate_website()?,
            "12" => self.update_poster()?,
            _ => self.fail("Invalid choice, please select a number from 0 to 12.")?,
        }
        Ok(Flow::Continue)
    }

    fn list_movies(&mut self) -> Result<()> {
        let movies = self.library.catalog().movies()?;
        writeln!(self.output, "{} movies in total", movies.len())?;
        if !movies.is_empty() {
            writeln!(self.output, "{}", render::movie_table(&movies))?;
        }
        Ok(())
    }

    async fn add_movie(&mut self) -> Result<()> {
        let prepared = loop {
            let Some(title) = self.prompt("Enter movie title: ")? else {
                return Ok(());
            };
            match self.library.prepare_add(&title).await {
                Err(AddError::InvalidTitle(msg)) => self.warn(&msg)?,
                other => break other,
            }
        };

        let mut candidate = match prepared {
            Ok(candidate) => candidate,
            Err(AddError::Catalog(e)) => return Err(e.into()),
            Err(e) => return self.warn(&e.to_string()),
        };

        if candidate.needs_rating() {
            let Some(rating) = self.read_rating()? else {
                return Ok(());
            };
            candidate = candidate.with_rating(rating);
        }

        let summary = added_summary(&candidate);
        match self.library.complete_add(candidate) {
            Ok(_) => self.succeed(&summary),
            Err(AddError::Catalog(CatalogError::DuplicateTitle(title))) => {
                self.warn(&format!("Movie '{}' already exists in the database.", title))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Ask until a valid rating is given. `None` when input ends.
    fn read_rating(&mut self) -> Result<Option<f64>> {
        loop {
            let Some(raw) = self.prompt("Enter movie rating (0-10): ")? else {
                return Ok(None);
            };
            match library::parse_rating(&raw) {
                Ok(rating) => return Ok(Some(rating)),
                Err(e) => self.warn(&e.to_string())?,
            }
        }
    }

    fn delete_movie(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Enter movie to delete: ")? else {
            return Ok(());
        };
        match self.library.catalog().delete(&title) {
            Ok(()) => self.succeed(&format!("Movie '{}' successfully deleted.", title)),
            Err(CatalogError::NotFound(_)) => {
                self.warn(&format!("Movie '{}' doesn't exist.", title))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn update_rating(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Enter movie name to update: ")? else {
            return Ok(());
        };
        let movie = match self.library.catalog().get(&title) {
            Ok(movie) => movie,
            Err(CatalogError::NotFound(_)) => {
                return self.warn(&format!("Movie '{}' doesn't exist.", title))
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(
            self.output,
            "Current rating of '{}': {}",
            movie.title,
            render::format_rating(movie.rating)
        )?;
        let Some(raw) = self.prompt("Enter new movie rating (0-10): ")? else {
            return Ok(());
        };
        let rating = match library::parse_rating(&raw) {
            Ok(rating) => rating,
            Err(e) => return self.warn(&format!("Invalid rating: {}", e)),
        };

        let confirm = self.prompt("Do you really want to update the rating? (y/n): ")?;
        if !matches!(confirm.as_deref(), Some(answer) if answer.eq_ignore_ascii_case("y")) {
            writeln!(self.output, "Update cancelled.")?;
            return Ok(());
        }

        self.apply_update(&title, MovieUpdate::rating(rating))
    }

    fn update_poster(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Enter movie name to update: ")? else {
            return Ok(());
        };
        let movie = match self.library.catalog().get(&title) {
            Ok(movie) => movie,
            Err(CatalogError::NotFound(_)) => {
                return self.warn(&format!("Movie '{}' doesn't exist.", title))
            }
            Err(e) => return Err(e.into()),
        };

        writeln!(
            self.output,
            "Current poster of '{}': {}",
            movie.title,
            movie.poster_url.as_deref().unwrap_or("none")
        )?;
        let Some(url) = self.prompt("Enter new poster URL: ")? else {
            return Ok(());
        };
        if url.is_empty() {
            return self.warn("Poster URL cannot be blank.");
        }

        self.apply_update(&title, MovieUpdate::poster_url(url))
    }

    fn apply_update(&mut self, title: &str, update: MovieUpdate) -> Result<()> {
        match self.library.catalog().update(title, update) {
            Ok(()) => self.succeed(&format!("Movie '{}' successfully updated.", title)),
            Err(CatalogError::NotFound(_)) => {
                self.warn(&format!("Movie '{}' doesn't exist.", title))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn show_stats(&mut self) -> Result<()> {
        let movies = self.library.catalog().movies()?;
        if movies.is_empty() {
            return self.fail("No movies in the database.");
        }
        match library::statistics(&movies) {
            Some(stats) => writeln!(self.output, "{}", render::stats_report(&stats))?,
            None => self.warn("No valid ratings found.")?,
        }
        Ok(())
    }

    fn random_movie(&mut self) -> Result<()> {
        let movies = self.library.catalog().movies()?;
        match library::pick_random(&movies) {
            Some(movie) => writeln!(self.output, "{}", render::recommendation(movie))?,
            None => writeln!(self.output, "No movies in the database.")?,
        }
        Ok(())
    }

    fn search_movies(&mut self) -> Result<()> {
        let Some(query) = self.prompt("Enter part of movie name: ")? else {
            return Ok(());
        };
        let movies = self.library.catalog().movies()?;
        let matches = library::search(&movies, &query);

        if matches.is_empty() {
            writeln!(self.output, "No movies found.")?;
        } else {
            writeln!(self.output, "Found movies ({}):", matches.len())?;
            writeln!(self.output, "{}", render::movie_table(matches))?;
        }
        Ok(())
    }

    fn sort_by_rating(&mut self) -> Result<()> {
        let movies = self.library.catalog().movies()?;
        let sorted = library::sorted_by_rating(&movies);
        writeln!(self.output, "{}", render::movie_table(sorted))?;
        Ok(())
    }

    fn sort_by_year(&mut self) -> Result<()> {
        let movies = self.library.catalog().movies()?;
        let sorted = library::sorted_by_year(&movies);
        writeln!(self.output, "{}", render::movie_table(sorted))?;
        Ok(())
    }

    fn filter_movies(&mut self) -> Result<()> {
        let criteria = FilterCriteria {
            min_rating: self.read_bound(
                "Enter minimum rating (leave blank for no minimum): ",
                "rating",
            )?,
            year_from: self.read_bound("Enter start year (leave blank for no start): ", "start year")?,
            year_to: self.read_bound("Enter end year (leave blank for no end): ", "end year")?,
        };
        debug!("Filtering with {:?}", criteria);

        let movies = self.library.catalog().movies()?;
        let matches = library::filter(&movies, &criteria);
        if matches.is_empty() {
            writeln!(self.output, "No film meets the filter criteria.")?;
        } else {
            writeln!(self.output, "Found films ({}):", matches.len())?;
            writeln!(self.output, "{}", render::movie_table(matches))?;
        }
        Ok(())
    }

    /// Optional numeric bound. Blank or unparsable input leaves it open.
    fn read_bound<T: FromStr>(&mut self, label: &str, what: &str) -> Result<Option<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.warn(&format!("Invalid input for {}, no limit used.", what))?;
                Ok(None)
            }
        }
    }

    fn generate_website(&mut self) -> Result<()> {
        let summary = export_html(self.library.catalog(), &self.export)?;
        self.succeed(&format!(
            "Website generated successfully at '{}' with {} movies.",
            summary.path.display(),
            summary.movie_count
        ))
    }

    /// Print `label` and read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn succeed(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", render::success(message))?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", render::warning(message))?;
        Ok(())
    }

    fn fail(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", render::failure(message))?;
        Ok(())
    }
}

fn added_summary(candidate: &MovieCandidate) -> String {
    format!(
        "Added movie: {} ({}) | Rating: {} | Poster: {}",
        candidate.title,
        candidate.year,
        render::format_rating(candidate.rating),
        candidate.poster_url.as_deref().unwrap_or("none")
    )
}
