//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the PlayDesk client.

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "playdesk.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log admin actions against an event (edit, delete, refund)
pub fn log_event_action(event_id: &str, action: &str, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        details = details,
        "Event action performed"
    );
}

/// Log the outcome of a refund request for a single participant
pub fn log_refund(event_id: &str, participant_id: &str, success: bool) {
    if success {
        warn!(
            event_id = event_id,
            participant_id = participant_id,
            "Refund issued"
        );
    } else {
        error!(
            event_id = event_id,
            participant_id = participant_id,
            "Refund request failed"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str, context: Option<&str>) {
    error!(
        endpoint = endpoint,
        error = error,
        context = context,
        "API error occurred"
    );
}
