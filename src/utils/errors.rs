//! Error handling for PlayDesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the PlayDesk client
#[derive(Error, Debug)]
pub enum PlayDeskError {
    #[error("Booking API error: {0}")]
    Api(#[from] ApiError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Capacity exceeded: {confirmed} confirmed slots against a limit of {limit}")]
    CapacityExceeded { confirmed: u32, limit: u32 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Participant index out of range: {index}")]
    ParticipantNotFound { index: usize },

    #[error("Participant is not refundable: {reason}")]
    NotRefundable { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Booking API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Booking API request failed: {0}")]
    RequestFailed(String),

    #[error("Booking API timeout")]
    Timeout,

    #[error("Invalid booking API response: {0}")]
    InvalidResponse(String),

    #[error("Booking API unavailable")]
    ServiceUnavailable,
}

/// Result type alias for PlayDesk operations
pub type Result<T> = std::result::Result<T, PlayDeskError>;

impl PlayDeskError {
    /// Transport failures are recovered by re-fetching authoritative state;
    /// validation failures are handled locally and never reach the network.
    pub fn is_recoverable(&self) -> bool {
        match self {
            PlayDeskError::Api(_) => true,
            PlayDeskError::Http(_) => true,
            PlayDeskError::Io(_) => true,
            PlayDeskError::Serialization(_) => false,
            PlayDeskError::Config(_) => false,
            PlayDeskError::Validation(_) => false,
            PlayDeskError::CapacityExceeded { .. } => false,
            PlayDeskError::EventNotFound { .. } => false,
            PlayDeskError::ParticipantNotFound { .. } => false,
            PlayDeskError::NotRefundable { .. } => false,
            PlayDeskError::UrlParse(_) => false,
        }
    }

    /// Whether the failure is a local validation rejection rather than a
    /// broken conversation with the backend.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PlayDeskError::Validation(_)
                | PlayDeskError::CapacityExceeded { .. }
                | PlayDeskError::ParticipantNotFound { .. }
                | PlayDeskError::NotRefundable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_not_recoverable_by_refetch() {
        let err = PlayDeskError::CapacityExceeded {
            confirmed: 9,
            limit: 8,
        };
        assert!(err.is_validation());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_api_errors_are_recoverable() {
        let err = PlayDeskError::Api(ApiError::Timeout);
        assert!(err.is_recoverable());
        assert!(!err.is_validation());
    }
}
