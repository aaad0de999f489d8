//! Venues API service implementation
//!
//! Venue CRUD against the booking platform. The venue endpoints wrap their
//! payloads in a `{ success, data, message }` envelope; a 2xx answer with
//! `success: false` is still a failure and carries the server's message.

use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Settings;
use crate::models::{Venue, VenueRequest};
use crate::services::events::{ensure_success, map_transport_error};
use crate::utils::errors::{ApiError, PlayDeskError, Result};

/// Envelope used by the venue endpoints
#[derive(Debug, Deserialize)]
struct VenueEnvelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
}

/// Venues API service
#[derive(Debug, Clone)]
pub struct VenueService {
    client: Client,
    settings: Settings,
}

impl VenueService {
    /// Create a new VenueService instance sharing the given HTTP client
    pub fn new(client: Client, settings: Settings) -> Self {
        Self { client, settings }
    }

    /// Fetch all venue records
    pub async fn fetch_venues(&self) -> Result<Vec<Venue>> {
        let url = format!("{}/venues", self.settings.api.base_url);
        debug!(url = %url, "Fetching venues");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = ensure_success(response, "fetch venues").await?;

        let envelope: VenueEnvelope<Vec<Venue>> = response
            .json()
            .await
            .map_err(|e| PlayDeskError::Api(ApiError::InvalidResponse(e.to_string())))?;

        unwrap_envelope(envelope, "fetch venues")
    }

    /// Create a venue record
    pub async fn create_venue(&self, request: &VenueRequest) -> Result<()> {
        let url = format!("{}/venues", self.settings.api.base_url);
        let response = self
            .admin(self.client.post(&url))
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = ensure_success(response, "create venue").await?;

        check_envelope(response, "create venue").await?;
        info!(name = %request.name, sport = %request.sport, "Venue created");
        Ok(())
    }

    /// Update a venue record
    pub async fn update_venue(&self, venue_id: &str, request: &VenueRequest) -> Result<()> {
        let url = format!("{}/venues/{}", self.settings.api.base_url, venue_id);
        let response = self
            .admin(self.client.put(&url))
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = ensure_success(response, "update venue").await?;

        check_envelope(response, "update venue").await?;
        info!(venue_id = venue_id, "Venue updated");
        Ok(())
    }

    /// Delete a venue record
    pub async fn delete_venue(&self, venue_id: &str) -> Result<()> {
        let url = format!("{}/venues/{}", self.settings.api.base_url, venue_id);
        let response = self
            .admin(self.client.delete(&url))
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = ensure_success(response, "delete venue").await?;

        check_envelope(response, "delete venue").await?;
        info!(venue_id = venue_id, "Venue deleted");
        Ok(())
    }

    fn admin(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.settings.api.admin_token {
            Some(token) => builder.header("x-admin-token", token),
            None => builder,
        }
    }
}

fn unwrap_envelope<T>(envelope: VenueEnvelope<T>, context: &str) -> Result<T> {
    if !envelope.success {
        return Err(PlayDeskError::Api(ApiError::RequestFailed(format!(
            "{}: {}",
            context,
            envelope.message.unwrap_or_else(|| "success: false".to_string())
        ))));
    }
    envelope.data.ok_or_else(|| {
        PlayDeskError::Api(ApiError::InvalidResponse(format!(
            "{}: missing data field",
            context
        )))
    })
}

async fn check_envelope(response: reqwest::Response, context: &str) -> Result<()> {
    let envelope: VenueEnvelope<serde_json::Value> = response
        .json()
        .await
        .map_err(|e| PlayDeskError::Api(ApiError::InvalidResponse(e.to_string())))?;
    if !envelope.success {
        return Err(PlayDeskError::Api(ApiError::RequestFailed(format!(
            "{}: {}",
            context,
            envelope.message.unwrap_or_else(|| "success: false".to_string())
        ))));
    }
    Ok(())
}
