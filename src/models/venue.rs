//! Venue model and event-form prefill helpers
//!
//! A venue offers one sport per record; a physical location with several
//! sports appears as several records sharing a name. The admin console uses
//! venue records only to pre-fill the event creation form.

use serde::{Deserialize, Serialize};

/// Catalogue of sport labels the admin console offers for venues.
pub const SPORT_OPTIONS: &[&str] = &[
    "Cricket",
    "Pickle Ball",
    "Badminton",
    "Foot Ball",
    "Tennis",
    "Paint Ball",
    "Shooting",
    "Pool Table",
    "Snooker",
    "Table Tennis",
    "Archery",
    "Volley Ball",
    "Basket Ball",
    "Yoga",
    "Zumba",
    "Taekwondo",
    "Gym",
    "Boxing",
    "Throw Ball",
    "Squash",
    "Skating",
    "Running",
    "Rugby",
    "Swimming",
    "Kabaddi",
    "Hiking",
    "Golf",
    "Gokarting",
    "Frisbee",
    "FoosBall",
    "Cycling",
    "Chess",
    "Carrom",
    "Bowling",
    "BaseBall",
    "Horse Riding",
    "Hockey",
    "Marathon",
];

/// A physical location offering a sport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub general_instructions: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub map_url: String,
}

/// Payload for creating or updating a venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRequest {
    pub name: String,
    pub location: String,
    pub image_url: String,
    pub description: String,
    pub sport: String,
    pub general_instructions: String,
    pub amenities: Vec<String>,
    pub map_url: String,
}

impl From<&Venue> for VenueRequest {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            location: venue.location.clone(),
            image_url: venue.image_url.clone(),
            description: venue.description.clone(),
            sport: venue.sport.clone(),
            general_instructions: venue.general_instructions.clone(),
            amenities: venue.amenities.clone(),
            map_url: venue.map_url.clone(),
        }
    }
}

/// Fields seeded into the event creation form from a venue record.
#[derive(Debug, Clone, PartialEq)]
pub struct VenuePrefill {
    pub venue_name: String,
    pub location: String,
    pub venue_image: String,
    /// The venue's general instructions become the event description.
    pub description: String,
}

/// List the sports offered at the named venue, in catalogue order.
pub fn venue_sports(venues: &[Venue], venue_name: &str) -> Vec<String> {
    venues
        .iter()
        .filter(|v| v.name == venue_name)
        .map(|v| v.sport.clone())
        .collect()
}

/// Find the prefill fields for a venue-name + sport pair, if such a venue
/// record exists.
pub fn prefill_from_venue(venues: &[Venue], venue_name: &str, sport: &str) -> Option<VenuePrefill> {
    venues
        .iter()
        .find(|v| v.name == venue_name && v.sport == sport)
        .map(|v| VenuePrefill {
            venue_name: v.name.clone(),
            location: v.location.clone(),
            venue_image: v.image_url.clone(),
            description: v.general_instructions.clone(),
        })
}
