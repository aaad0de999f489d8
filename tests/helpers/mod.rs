//! Shared helpers for integration tests
//!
//! Builds settings pointing at a wiremock server and sample event payloads
//! shaped like the booking API's responses.

use serde_json::{json, Value};

use PlayDesk::config::{ApiConfig, ListingConfig, LoggingConfig, Settings};

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Settings wired to a mock server's URI
pub fn test_settings(server_uri: &str) -> Settings {
    Settings {
        api: ApiConfig {
            base_url: format!("{}/api", server_uri),
            timeout_seconds: 5,
            admin_token: Some(ADMIN_TOKEN.to_string()),
        },
        listing: ListingConfig {
            default_date_filter: "today".to_string(),
            default_sport: "all".to_string(),
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            file_path: "/tmp/playdesk-test".to_string(),
        },
    }
}

/// One event document as the API serves it
pub fn event_json(id: &str, name: &str, participants: Value) -> Value {
    json!({
        "_id": id,
        "__v": 0,
        "slug": name.to_lowercase().replace(' ', "-"),
        "name": name,
        "sportsName": "Tennis",
        "venueName": "Arena One",
        "location": "Delhi",
        "venueImage": "https://img.example/arena-one.jpg",
        "description": "Bring your own racket",
        "slot": "9:00 AM - 11:00 AM",
        "price": 299.0,
        "participantsLimit": 8,
        "currentParticipants": 0,
        "slotsLeft": 8,
        "date": "2024-06-16T09:00:00Z",
        "participants": participants
    })
}

pub fn participant_json(id: &str, name: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "phone": "9876543210",
        "skillLevel": "beginner",
        "quantity": 1,
        "amount": 299.0,
        "bookingDate": "2024-06-10T12:00:00Z",
        "paymentStatus": status,
        "refunded": false
    })
}

/// A two-event listing response with the available-sports facet
pub fn listing_json() -> Value {
    json!({
        "events": [
            event_json("ev1", "Sunday Tennis", json!([participant_json("p1", "Asha", "success")])),
            event_json("ev2", "Monday Smash", json!([]))
        ],
        "availableSports": ["Tennis", "Cricket"]
    })
}
