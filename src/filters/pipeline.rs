//! Event filter pipeline
//!
//! Composes the sport, city, venue, booked-slot and date predicates into a
//! single pure pass over the full event collection. The pipeline is a full
//! recomputation: it runs from the unfiltered snapshot whenever any single
//! selection changes, never incrementally.

use chrono::NaiveDate;

use crate::filters::accounting::confirmed_slots;
use crate::filters::dates::DateFilter;
use crate::models::Event;

/// A single-choice facet selection with an explicit "all" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Only(String),
}

impl Selection {
    /// Parse a wire value; the literal "all" is the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Selection::All
        } else {
            Selection::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => "all",
            Selection::Only(value) => value,
        }
    }
}

/// A booked-slot-count bucket. Discrete buckets match an exact confirmed
/// total; `MoreThanFour` matches totals strictly greater than four.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotBucket {
    Exactly(u32),
    MoreThanFour,
}

impl SlotBucket {
    pub fn matches(&self, booked_slots: u32) -> bool {
        match self {
            SlotBucket::Exactly(count) => booked_slots == *count,
            SlotBucket::MoreThanFour => booked_slots > 4,
        }
    }
}

/// The complete set of filter selections. Immutable from the pipeline's
/// point of view; the owning layer holds the only mutable copy.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub sport: Selection,
    pub city: Selection,
    pub venue: Selection,
    /// OR-combined; an event needs to match only one active bucket.
    pub slot_buckets: Vec<SlotBucket>,
    pub date_filter: DateFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            sport: Selection::All,
            city: Selection::All,
            venue: Selection::All,
            slot_buckets: Vec::new(),
            date_filter: DateFilter::Today,
        }
    }
}

impl FilterState {
    /// Change the city selection. The venue selection is reset to "all" so
    /// a venue that is invalid for the new city never survives silently.
    pub fn select_city(&mut self, city: Selection) {
        self.city = city;
        self.venue = Selection::All;
    }

    /// Checkbox semantics for the slot-bucket dropdown: toggle membership.
    pub fn toggle_slot_bucket(&mut self, bucket: SlotBucket) {
        if let Some(pos) = self.slot_buckets.iter().position(|b| *b == bucket) {
            self.slot_buckets.remove(pos);
        } else {
            self.slot_buckets.push(bucket);
        }
    }
}

/// Apply the filter selections to the full event collection as sequential
/// narrowing passes and return the surviving events in input order.
///
/// No sort is applied after filtering; callers wanting today/upcoming/past
/// ordering run [`crate::filters::bucket_by_date`] themselves.
pub fn apply(state: &FilterState, events: &[Event], today: NaiveDate) -> Vec<Event> {
    let mut result: Vec<Event> = events.to_vec();

    if let Selection::Only(sport) = &state.sport {
        result.retain(|event| event.sports_name.eq_ignore_ascii_case(sport));
    }

    if let Selection::Only(city) = &state.city {
        result.retain(|event| &event.location == city);
    }

    if let Selection::Only(venue) = &state.venue {
        result.retain(|event| &event.venue_name == venue);
    }

    if !state.slot_buckets.is_empty() {
        result.retain(|event| {
            let booked_slots = confirmed_slots(&event.participants);
            state
                .slot_buckets
                .iter()
                .any(|bucket| bucket.matches(booked_slots))
        });
    }

    result.retain(|event| state.date_filter.matches(event, today));

    result
}
