//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{PlayDeskError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_listing_config(&settings.listing)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate booking API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(PlayDeskError::Config(
            "Booking API base URL is required".to_string(),
        ));
    }

    Url::parse(&config.base_url)
        .map_err(|e| PlayDeskError::Config(format!("Invalid API base URL: {}", e)))?;

    if config.timeout_seconds == 0 {
        return Err(PlayDeskError::Config(
            "API timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate listing defaults
fn validate_listing_config(config: &super::ListingConfig) -> Result<()> {
    if config.default_sport.is_empty() {
        return Err(PlayDeskError::Config(
            "Default sport selection is required (use \"all\" for no filter)".to_string(),
        ));
    }

    if config.default_date_filter.is_empty() {
        return Err(PlayDeskError::Config(
            "Default date filter is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PlayDeskError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PlayDeskError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        let mut settings = Settings::default();
        settings.api.base_url = "not a url".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
