use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - OMDb timeout is not 0
/// - Database and export paths are not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.omdb.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "omdb.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.database.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "database.path cannot be empty".to_string(),
        ));
    }

    if config.export.output_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "export.output_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
