//! Services module
//!
//! This module contains the HTTP services that talk to the booking
//! platform's remote API.

pub mod events;
pub mod venues;

// Re-export commonly used services
pub use events::{EventService, EventsResponse};
pub use venues::VenueService;

use std::time::Duration;

use reqwest::Client;

use crate::config::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all API services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub event_service: EventService,
    pub venue_service: VenueService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one HTTP client
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .user_agent(format!("PlayDesk/{}", crate::VERSION))
            .build()?;

        let event_service = EventService::new(client.clone(), settings.clone());
        let venue_service = VenueService::new(client, settings);

        Ok(Self {
            event_service,
            venue_service,
        })
    }
}
