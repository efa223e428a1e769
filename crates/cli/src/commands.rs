//! Command-line definitions for moviedb

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// moviedb - personal movie catalog
#[derive(Parser)]
#[command(name = "moviedb")]
#[command(about = "Personal movie catalog with OMDb lookup and HTML export")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: $MOVIEDB_CONFIG or ./moviedb.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file, overrides database.path from the configuration
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, the interactive menu starts.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Interactive menu
    Menu,

    /// List all movies
    List,

    /// Show rating statistics
    Stats,

    /// Generate the static HTML page
    Export {
        /// Output file, overrides export.output_path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import movies from a legacy movies.json file
    ImportLegacy {
        /// Path to the JSON file
        path: PathBuf,
    },

    /// Print the effective configuration (API key redacted)
    Config,
}
