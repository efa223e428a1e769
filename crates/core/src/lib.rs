pub mod catalog;
pub mod config;
pub mod export;
pub mod legacy;
pub mod library;
pub mod metadata;
pub mod testing;

pub use catalog::{
    CatalogError, Movie, MovieCatalog, MovieEntry, MovieUpdate, NewMovie, SqliteMovieCatalog,
};
pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, DatabaseConfig, ExportConfig, SanitizedConfig,
};
pub use export::{export_html, render_html, ExportError, ExportSummary};
pub use legacy::{import_legacy, load_legacy_file, ImportReport, LegacyImportError, LegacyMovie};
pub use library::{
    statistics, AddError, CatalogStatistics, FilterCriteria, MovieCandidate, MovieLibrary,
};
pub use metadata::{MetadataError, MetadataLookup, MovieMetadata, OmdbClient, OmdbConfig};
