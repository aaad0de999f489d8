//! Pure event filtering core
//!
//! Everything in this module is a deterministic computation over an
//! in-memory event snapshot: slot accounting, date bucketing, the named
//! date predicates, the composed filter pipeline, and facet derivation.
//! Nothing here touches the network or holds mutable state.

pub mod accounting;
pub mod dates;
pub mod facets;
pub mod pipeline;

// Re-export commonly used items
pub use accounting::{check_capacity, confirmed_slots, CapacityCheck};
pub use dates::{bucket_by_date, DateFilter};
pub use facets::{available_cities, available_venues};
pub use pipeline::{apply, FilterState, Selection, SlotBucket};
