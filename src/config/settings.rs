//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub listing: ListingConfig,
    pub logging: LoggingConfig,
}

/// Booking platform API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the booking platform, e.g. "https://api.example.com/api".
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Sent as the `x-admin-token` header on admin-scoped calls. Listing
    /// calls work without one.
    pub admin_token: Option<String>,
}

/// Default selections for the listing view
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// One of the named date filter labels; unrecognized labels fall back
    /// to "today".
    pub default_date_filter: String,
    pub default_sport: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("PLAYDESK"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::PlayDeskError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:5000/api".to_string(),
                timeout_seconds: 10,
                admin_token: None,
            },
            listing: ListingConfig {
                default_date_filter: "today".to_string(),
                default_sport: "all".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/playdesk".to_string(),
            },
        }
    }
}
