//! Facet derivation for filter controls
//!
//! Distinct city/venue values available given the current selections, used
//! to populate the cascading dropdowns. City options always come from the
//! unfiltered collection; venue options narrow to the selected city.

use crate::filters::pipeline::Selection;
use crate::models::Event;

/// Distinct non-empty city values across all events, in first-seen order.
/// City options are never narrowed by other selections.
pub fn available_cities(events: &[Event]) -> Vec<String> {
    distinct_non_empty(events.iter().map(|event| event.location.as_str()))
}

/// Distinct non-empty venue names, narrowed to events in the selected city
/// (or the full collection when the city selection is "all").
pub fn available_venues(events: &[Event], city: &Selection) -> Vec<String> {
    distinct_non_empty(
        events
            .iter()
            .filter(|event| match city {
                Selection::All => true,
                Selection::Only(city) => &event.location == city,
            })
            .map(|event| event.venue_name.as_str()),
    )
}

fn distinct_non_empty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut distinct: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !distinct.iter().any(|seen| seen == value) {
            distinct.push(value.to_string());
        }
    }
    distinct
}
