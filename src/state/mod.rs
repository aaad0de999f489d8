//! Client-side state management
//!
//! The snapshot store and the edit-session working copy. Both layers hold
//! the only mutable copies of their data; everything they derive goes
//! through the pure filtering core.

pub mod editor;
pub mod store;

pub use editor::{EventEditor, ParticipantDraft};
pub use store::EventStore;
