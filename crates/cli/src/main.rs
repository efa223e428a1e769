mod commands;
mod menu;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviedb_core::{
    export_html, import_legacy, library, load_config, load_config_or_default, load_legacy_file,
    validate_config, Config, MetadataLookup, MovieCatalog, MovieLibrary, OmdbClient,
    SanitizedConfig, SqliteMovieCatalog,
};

use commands::{Cli, Commands};
use menu::Menu;

/// Config file used when neither --config nor MOVIEDB_CONFIG is set
const DEFAULT_CONFIG_PATH: &str = "moviedb.toml";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Plain API_KEY / OMDB_URL may come from a .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with menu output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_settings(&cli)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Config => {
            let sanitized = SanitizedConfig::from(&config);
            println!("{}", serde_json::to_string_pretty(&sanitized)?);
        }
        Commands::List => {
            let catalog = open_catalog(&config)?;
            let movies = catalog.movies()?;
            println!("{} movies in total", movies.len());
            if !movies.is_empty() {
                println!("{}", render::movie_table(&movies));
            }
        }
        Commands::Stats => {
            let catalog = open_catalog(&config)?;
            let movies = catalog.movies()?;
            if movies.is_empty() {
                println!("{}", render::failure("No movies in the database."));
                return Ok(());
            }
            match library::statistics(&movies) {
                Some(stats) => println!("{}", render::stats_report(&stats)),
                None => println!("{}", render::warning("No valid ratings found.")),
            }
        }
        Commands::Export { output } => {
            let catalog = open_catalog(&config)?;
            let mut export = config.export.clone();
            if let Some(path) = output {
                export.output_path = path;
            }
            let summary = export_html(&catalog, &export)?;
            println!(
                "{}",
                render::success(&format!(
                    "Website generated successfully at '{}' with {} movies.",
                    summary.path.display(),
                    summary.movie_count
                ))
            );
        }
        Commands::ImportLegacy { path } => {
            let catalog = open_catalog(&config)?;
            let entries = load_legacy_file(&path)
                .with_context(|| format!("Failed to load legacy file {:?}", path))?;
            let report = import_legacy(&catalog, entries)?;
            println!(
                "{}",
                render::success(&format!("Imported {} movies.", report.imported))
            );
            if !report.duplicates.is_empty() {
                println!(
                    "{}",
                    render::warning(&format!(
                        "Skipped existing: {}",
                        report.duplicates.join(", ")
                    ))
                );
            }
            if report.invalid > 0 {
                println!(
                    "{}",
                    render::warning(&format!("Skipped {} invalid entries.", report.invalid))
                );
            }
        }
        Commands::Menu => {
            let catalog: Arc<dyn MovieCatalog> = Arc::new(open_catalog(&config)?);
            let lookup: Option<Arc<dyn MetadataLookup>> =
                match OmdbClient::new(config.omdb.clone()) {
                    Ok(client) => Some(Arc::new(client)),
                    Err(e) => {
                        warn!("Adding movies is disabled: {}", e);
                        None
                    }
                };
            let movie_library = MovieLibrary::new(catalog, lookup);

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Menu::new(&movie_library, config.export.clone(), stdin.lock(), stdout.lock())
                .run()
                .await?;
        }
    }

    Ok(())
}

/// Resolve the config file, apply command-line overrides and validate.
///
/// An explicitly named file must exist; the default one may be absent.
fn load_settings(cli: &Cli) -> Result<Config> {
    let explicit = cli
        .config
        .clone()
        .or_else(|| std::env::var("MOVIEDB_CONFIG").ok().map(PathBuf::from));

    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(&path)
                .with_context(|| format!("Failed to load config from {:?}", path))?
        }
        None => load_config_or_default(PathBuf::from(DEFAULT_CONFIG_PATH).as_path())
            .context("Failed to load configuration")?,
    };

    if let Some(db) = &cli.db {
        config.database.path = db.clone();
    }

    validate_config(&config).context("Configuration validation failed")?;
    info!("Database path: {:?}", config.database.path);

    Ok(config)
}

fn open_catalog(config: &Config) -> Result<SqliteMovieCatalog> {
    SqliteMovieCatalog::new(&config.database.path)
        .with_context(|| format!("Failed to open database {:?}", config.database.path))
}
