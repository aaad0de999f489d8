//! Events API service implementation
//!
//! This service handles every call against the booking platform's events
//! endpoints: listing, creation, edits, deletion and refunds. Admin-scoped
//! calls carry the configured admin token in an `x-admin-token` header.

use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::filters::Selection;
use crate::models::{CreateEventRequest, Event};
use crate::utils::errors::{ApiError, PlayDeskError, Result};

/// Response shape of the events listing endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub events: Vec<Event>,
    #[serde(default)]
    pub available_sports: Vec<String>,
}

/// Events API service
#[derive(Debug, Clone)]
pub struct EventService {
    client: Client,
    settings: Settings,
}

impl EventService {
    /// Create a new EventService instance sharing the given HTTP client
    pub fn new(client: Client, settings: Settings) -> Self {
        Self { client, settings }
    }

    /// Fetch the full event collection, optionally narrowed by sport on the
    /// server side. The response also carries the available-sports facet.
    pub async fn fetch_events(&self, sport: &Selection) -> Result<EventsResponse> {
        let url = format!(
            "{}/events?sport={}",
            self.settings.api.base_url,
            sport.as_str()
        );
        debug!(url = %url, "Fetching events");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = ensure_success(response, "fetch events").await?;

        let events: EventsResponse = response
            .json()
            .await
            .map_err(|e| PlayDeskError::Api(ApiError::InvalidResponse(e.to_string())))?;

        debug!(
            count = events.events.len(),
            sports = events.available_sports.len(),
            "Fetched event collection"
        );
        Ok(events)
    }

    /// Create a new event through the admin console endpoint
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<()> {
        let url = format!("{}/events/add-event", self.settings.api.base_url);
        let response = self
            .admin(self.client.post(&url))
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;
        ensure_success(response, "create event").await?;

        info!(name = %request.name, sport = %request.sports_name, "Event created");
        Ok(())
    }

    /// Persist an edited event. The identifier and version fields are never
    /// serialized; the backend re-validates the capacity invariants and a
    /// non-2xx answer means the optimistic local copy must be discarded.
    pub async fn update_event(&self, event_id: &str, event: &Event) -> Result<()> {
        let url = format!("{}/events/{}", self.settings.api.base_url, event_id);
        let response = self
            .admin(self.client.put(&url))
            .json(event)
            .send()
            .await
            .map_err(map_transport_error)?;
        ensure_success(response, "update event").await?;

        info!(event_id = event_id, "Event updated");
        Ok(())
    }

    /// Delete an event. Callers drop it from local state only after this
    /// returns Ok.
    pub async fn delete_event(&self, event_id: &str) -> Result<()> {
        let url = format!("{}/events/{}", self.settings.api.base_url, event_id);
        let response = self
            .admin(self.client.delete(&url))
            .send()
            .await
            .map_err(map_transport_error)?;
        ensure_success(response, "delete event").await?;

        info!(event_id = event_id, "Event deleted");
        Ok(())
    }

    /// Issue a refund for a single participant registration
    pub async fn refund_participant(&self, event_id: &str, participant_id: &str) -> Result<()> {
        let url = format!(
            "{}/events/{}/refund/{}",
            self.settings.api.base_url, event_id, participant_id
        );
        let response = self
            .admin(self.client.post(&url))
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(map_transport_error)?;

        if let Err(e) = ensure_success(response, "refund participant").await {
            warn!(
                event_id = event_id,
                participant_id = participant_id,
                error = %e,
                "Refund request failed"
            );
            return Err(e);
        }

        info!(
            event_id = event_id,
            participant_id = participant_id,
            "Refund processed"
        );
        Ok(())
    }

    /// Fetch events that have at least one successful payment, for the
    /// refund console.
    pub async fn events_with_payments(&self) -> Result<Vec<Event>> {
        let url = format!(
            "{}/events/refunds/events-with-payments",
            self.settings.api.base_url
        );
        let response = self
            .admin(self.client.get(&url))
            .send()
            .await
            .map_err(map_transport_error)?;
        let response = ensure_success(response, "fetch refundable events").await?;

        response
            .json()
            .await
            .map_err(|e| PlayDeskError::Api(ApiError::InvalidResponse(e.to_string())))
    }

    /// Attach the admin token header when one is configured
    fn admin(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.settings.api.admin_token {
            Some(token) => builder.header("x-admin-token", token),
            None => builder,
        }
    }
}

/// Map reqwest transport failures into the API error taxonomy
pub(crate) fn map_transport_error(e: reqwest::Error) -> PlayDeskError {
    if e.is_timeout() {
        PlayDeskError::Api(ApiError::Timeout)
    } else if e.is_connect() {
        PlayDeskError::Api(ApiError::ServiceUnavailable)
    } else {
        PlayDeskError::Api(ApiError::RequestFailed(e.to_string()))
    }
}

/// Reject non-2xx responses with the status and body text preserved
pub(crate) async fn ensure_success(response: Response, context: &str) -> Result<Response> {
    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(PlayDeskError::Api(ApiError::RequestFailed(format!(
            "{}: HTTP {}: {}",
            context, status, error_text
        ))));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_response_deserialization() {
        let json = r#"{
            "events": [],
            "availableSports": ["Tennis", "Cricket"]
        }"#;
        let response: EventsResponse = serde_json::from_str(json).unwrap();
        assert!(response.events.is_empty());
        assert_eq!(response.available_sports, vec!["Tennis", "Cricket"]);
    }

    #[test]
    fn test_events_response_without_sports_facet() {
        let json = r#"{"events": []}"#;
        let response: EventsResponse = serde_json::from_str(json).unwrap();
        assert!(response.available_sports.is_empty());
    }
}
