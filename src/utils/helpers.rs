//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Utc};

/// Format an event timestamp for listing display, e.g. "Sunday, Jun 16, 2024"
pub fn format_event_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%A, %b %-d, %Y").to_string()
}

/// Capitalize the first letter of a sport label for display
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Validate phone number format (basic validation)
pub fn is_valid_phone(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ')
        && phone.len() >= 10
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.len() <= max_length {
        text.to_string()
    } else {
        format!("{}...", &text[..max_length.saturating_sub(3)])
    }
}

/// Label for the remaining-capacity badge on a listing card
pub fn slots_left_label(slots_left: i64) -> String {
    if slots_left > 1 {
        format!("{} Slots Left!", slots_left)
    } else if slots_left == 1 {
        "1 Slot Left!".to_string()
    } else {
        "Sold Out".to_string()
    }
}
