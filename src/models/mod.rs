//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod venue;

// Re-export commonly used models
pub use event::{CreateEventRequest, Event, Participant, PaymentStatus, SkillLevel};
pub use venue::{prefill_from_venue, venue_sports, Venue, VenuePrefill, VenueRequest, SPORT_OPTIONS};
