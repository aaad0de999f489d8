//! In-memory event snapshot
//!
//! The store holds the authoritative client-side copy of the event
//! collection fetched from the booking API. Mutations are optimistic:
//! the API call goes first, local state changes only on success, and any
//! failure falls back to a full re-fetch so the snapshot never drifts
//! from server truth.

use tracing::warn;

use crate::filters::Selection;
use crate::models::Event;
use crate::services::EventService;
use crate::utils::errors::Result;

/// Client-side snapshot of the event collection
#[derive(Debug)]
pub struct EventStore {
    service: EventService,
    sport: Selection,
    events: Vec<Event>,
    available_sports: Vec<String>,
}

impl EventStore {
    /// Create an empty store; call [`EventStore::refresh`] to populate it.
    pub fn new(service: EventService) -> Self {
        Self {
            service,
            sport: Selection::All,
            events: Vec::new(),
            available_sports: Vec::new(),
        }
    }

    /// Re-fetch the full collection for the current sport selection.
    pub async fn refresh(&mut self) -> Result<()> {
        let response = self.service.fetch_events(&self.sport).await?;
        self.events = response.events;
        self.available_sports = response.available_sports;
        Ok(())
    }

    /// The current snapshot, in server order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The available-sports facet delivered alongside the collection.
    pub fn available_sports(&self) -> &[String] {
        &self.available_sports
    }

    pub fn sport(&self) -> &Selection {
        &self.sport
    }

    /// Change the server-side sport narrowing and re-fetch.
    pub async fn select_sport(&mut self, sport: Selection) -> Result<()> {
        self.sport = sport;
        self.refresh().await
    }

    /// Admin search: case-insensitive substring match on event name or
    /// identifier. A blank query returns the full snapshot.
    pub fn search(&self, query: &str) -> Vec<Event> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.events.clone();
        }
        self.events
            .iter()
            .filter(|event| {
                event.name.to_lowercase().contains(&query)
                    || event.id.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    pub fn find(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == event_id)
    }

    /// Delete an event. The local copy is removed only after the API
    /// acknowledges; on failure the snapshot is re-fetched and the error
    /// surfaced.
    pub async fn delete_event(&mut self, event_id: &str) -> Result<()> {
        match self.service.delete_event(event_id).await {
            Ok(()) => {
                self.events.retain(|event| event.id != event_id);
                Ok(())
            }
            Err(e) => {
                warn!(event_id = event_id, error = %e, "Delete failed, re-fetching authoritative state");
                if let Err(refresh_err) = self.refresh().await {
                    warn!(error = %refresh_err, "Recovery re-fetch failed");
                }
                Err(e)
            }
        }
    }

    /// Persist an edited event and merge it into the snapshot. On failure
    /// the optimistic copy is discarded and the snapshot re-fetched.
    pub async fn save_event(&mut self, edited: &Event) -> Result<()> {
        match self.service.update_event(&edited.id, edited).await {
            Ok(()) => {
                if let Some(existing) = self.events.iter_mut().find(|e| e.id == edited.id) {
                    *existing = edited.clone();
                }
                Ok(())
            }
            Err(e) => {
                warn!(event_id = %edited.id, error = %e, "Edit failed, re-fetching authoritative state");
                if let Err(refresh_err) = self.refresh().await {
                    warn!(error = %refresh_err, "Recovery re-fetch failed");
                }
                Err(e)
            }
        }
    }
}
