//! PlayDesk booking client
//!
//! A headless admin and listing client for a sports-venue event booking
//! platform. This library provides modular components for fetching event and
//! venue collections from the remote booking API, deriving filtered and
//! ordered event views through a pure filtering core, and driving admin
//! workflows (event edits, participant management, refunds) with local
//! capacity validation.

#![allow(non_snake_case)]

pub mod config;
pub mod filters;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{PlayDeskError, Result};

// Re-export main components for easy access
pub use filters::{DateFilter, FilterState, Selection, SlotBucket};
pub use services::ServiceFactory;
pub use state::{EventEditor, EventStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
