//! Event and participant models
//!
//! The booking API sends loosely-typed JSON; payment status and skill level
//! are narrowed into strict enums at the deserialization boundary so the
//! filtering core can assume exhaustiveness.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment state of a single registration. Only `Success` counts toward
/// capacity consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Success,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }
}

/// Self-reported skill level of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[serde(rename = "beginner")]
    Beginner,
    #[serde(rename = "intermediate/advanced")]
    IntermediateAdvanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::IntermediateAdvanced => "intermediate/advanced",
        }
    }
}

/// One registration against an event. List order is registration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Server-assigned identifier; absent on registrations that have not
    /// been persisted yet.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub skill_level: SkillLevel,
    /// Number of slots this single registration consumes. The backend has
    /// historical records without the field; missing means zero.
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub amount: f64,
    pub booking_date: DateTime<Utc>,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub refunded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_date: Option<DateTime<Utc>>,
}

impl Participant {
    /// A participant is refundable when the payment went through and no
    /// refund has been issued yet.
    pub fn is_refundable(&self) -> bool {
        self.payment_status == PaymentStatus::Success && !self.refunded
    }
}

/// A bookable session at a venue.
///
/// `current_participants` and `slots_left` are derived values; the editor
/// recomputes them from the participant list after every mutation rather
/// than trusting the stored numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Immutable after creation. Never serialized back on edits; the update
    /// endpoint rejects payloads that carry the identifier.
    #[serde(rename = "_id", skip_serializing)]
    pub id: String,
    /// URL-stable human-readable identifier, immutable after creation.
    pub slug: String,
    pub name: String,
    pub sports_name: String,
    pub venue_name: String,
    /// City string used by the city facet.
    pub location: String,
    #[serde(default)]
    pub venue_image: String,
    #[serde(default)]
    pub description: String,
    /// Display label for the time slot, e.g. "9:00 AM - 11:00 AM".
    #[serde(default)]
    pub slot: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_price: Option<f64>,
    pub participants_limit: u32,
    #[serde(default)]
    pub current_participants: u32,
    /// May go negative transiently inside an edit session before validation
    /// rejects the save.
    #[serde(default)]
    pub slots_left: i64,
    /// The instant the event occurs.
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Backend document version; stripped from edit payloads.
    #[serde(rename = "__v", default, skip_serializing)]
    pub version: Option<i64>,
}

/// Payload for creating a new event through the admin console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub sports_name: String,
    pub venue_name: String,
    pub location: String,
    pub venue_image: String,
    pub description: String,
    pub slot: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_price: Option<f64>,
    pub participants_limit: u32,
    pub date: DateTime<Utc>,
}
