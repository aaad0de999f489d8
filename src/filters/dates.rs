//! Date bucketing and named date-range predicates
//!
//! All comparisons work at local-day granularity: timestamps are truncated
//! to their calendar date before deciding today/upcoming/past, while tie
//! breaking inside a bucket uses the full timestamp. The reference `today`
//! is always passed in by the caller so the logic stays deterministic.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::models::{Event, PaymentStatus};

/// Named date-range filter modes offered by the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    Today,
    Tomorrow,
    ThisWeekend,
    Next7Days,
    Past,
}

impl DateFilter {
    /// Parse a wire label. Unrecognized labels fall back to `Today`.
    pub fn parse(label: &str) -> Self {
        match label {
            "today" => DateFilter::Today,
            "tomorrow" => DateFilter::Tomorrow,
            "thisweekend" => DateFilter::ThisWeekend,
            "next7days" => DateFilter::Next7Days,
            "past" => DateFilter::Past,
            _ => DateFilter::Today,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFilter::Today => "today",
            DateFilter::Tomorrow => "tomorrow",
            DateFilter::ThisWeekend => "thisweekend",
            DateFilter::Next7Days => "next7days",
            DateFilter::Past => "past",
        }
    }

    /// Decide whether an event's timestamp qualifies under this mode,
    /// relative to the given reference date.
    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        let event_date = event.date.date_naive();
        match self {
            DateFilter::Today => event_date == today,
            DateFilter::Tomorrow => event_date == today + Duration::days(1),
            DateFilter::ThisWeekend => {
                let saturday = next_saturday(today);
                let sunday = saturday + Duration::days(1);
                event_date == saturday || event_date == sunday
            }
            DateFilter::Next7Days => {
                // Full-timestamp comparison against day-start boundaries,
                // inclusive on both ends.
                let start = day_start(today);
                let end = day_start(today + Duration::days(7));
                let ts = event.date.naive_utc();
                ts >= start && ts <= end
            }
            DateFilter::Past => {
                // Past events with zero successful bookings are noise and
                // stay suppressed from the past-events view.
                let has_successful_booking = event
                    .participants
                    .iter()
                    .any(|p| p.payment_status == PaymentStatus::Success);
                event_date < today && has_successful_booking
            }
        }
    }
}

/// Midnight at the start of the given calendar date.
fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap_or_default()
}

/// The Saturday of the current week, searching forward from `today`.
/// On a Sunday this already points at the following weekend.
fn next_saturday(today: NaiveDate) -> NaiveDate {
    let days_ahead =
        (Weekday::Sat.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
    today + Duration::days(i64::from(days_ahead))
}

/// Partition events by their relation to `today` and concatenate the
/// buckets: today's events first (ascending by time of day), then upcoming
/// events (ascending), then past events (most recent first). Sorting is
/// stable, so events with identical timestamps keep their input order.
pub fn bucket_by_date(events: &[Event], today: NaiveDate) -> Vec<Event> {
    let mut today_events = Vec::new();
    let mut upcoming_events = Vec::new();
    let mut past_events = Vec::new();

    for event in events {
        let event_date = event.date.date_naive();
        if event_date == today {
            today_events.push(event.clone());
        } else if event_date > today {
            upcoming_events.push(event.clone());
        } else {
            past_events.push(event.clone());
        }
    }

    today_events.sort_by(|a, b| a.date.cmp(&b.date));
    upcoming_events.sort_by(|a, b| a.date.cmp(&b.date));
    past_events.sort_by(|a, b| b.date.cmp(&a.date));

    let mut ordered = today_events;
    ordered.append(&mut upcoming_events);
    ordered.append(&mut past_events);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    use crate::models::{Participant, SkillLevel};

    fn event_at(id: &str, date: chrono::DateTime<Utc>) -> Event {
        Event {
            id: id.to_string(),
            slug: id.to_string(),
            name: id.to_string(),
            sports_name: "Tennis".to_string(),
            venue_name: "Arena One".to_string(),
            location: "Delhi".to_string(),
            venue_image: String::new(),
            description: String::new(),
            slot: String::new(),
            price: 299.0,
            actual_price: None,
            participants_limit: 8,
            current_participants: 0,
            slots_left: 8,
            date,
            participants: vec![],
            version: None,
        }
    }

    fn with_successful_participant(mut event: Event) -> Event {
        event.participants.push(Participant {
            id: Some("p1".to_string()),
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            skill_level: SkillLevel::Beginner,
            quantity: 1,
            amount: 299.0,
            booking_date: Utc::now(),
            payment_status: PaymentStatus::Success,
            refunded: false,
            refund_date: None,
        });
        event
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_today_and_tomorrow_match_calendar_dates() {
        let morning = event_at("a", Utc.with_ymd_and_hms(2024, 6, 10, 6, 0, 0).unwrap());
        let next_day = event_at("b", Utc.with_ymd_and_hms(2024, 6, 11, 23, 0, 0).unwrap());
        assert!(DateFilter::Today.matches(&morning, today()));
        assert!(!DateFilter::Today.matches(&next_day, today()));
        assert!(DateFilter::Tomorrow.matches(&next_day, today()));
        assert!(!DateFilter::Tomorrow.matches(&morning, today()));
    }

    #[test]
    fn test_unrecognized_label_falls_back_to_today() {
        assert_eq!(DateFilter::parse("fortnight"), DateFilter::Today);
        assert_eq!(DateFilter::parse("past"), DateFilter::Past);
    }

    #[test]
    fn test_this_weekend_takes_next_saturday_and_sunday() {
        // 2024-06-10 is a Monday; the weekend is June 15/16.
        let saturday = event_at("sat", Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap());
        let sunday = event_at("sun", Utc.with_ymd_and_hms(2024, 6, 16, 9, 0, 0).unwrap());
        let friday = event_at("fri", Utc.with_ymd_and_hms(2024, 6, 14, 9, 0, 0).unwrap());
        assert!(DateFilter::ThisWeekend.matches(&saturday, today()));
        assert!(DateFilter::ThisWeekend.matches(&sunday, today()));
        assert!(!DateFilter::ThisWeekend.matches(&friday, today()));
    }

    #[test]
    fn test_this_weekend_on_a_saturday_includes_that_day() {
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let event = event_at("sat", Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap());
        assert!(DateFilter::ThisWeekend.matches(&event, saturday));
    }

    #[test]
    fn test_next7days_is_inclusive_at_both_boundaries() {
        let boundary = event_at("in", Utc.with_ymd_and_hms(2024, 6, 17, 0, 0, 0).unwrap());
        let beyond = event_at("out", Utc.with_ymd_and_hms(2024, 6, 18, 0, 1, 0).unwrap());
        let now_start = event_at("start", Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap());
        assert!(DateFilter::Next7Days.matches(&boundary, today()));
        assert!(!DateFilter::Next7Days.matches(&beyond, today()));
        assert!(DateFilter::Next7Days.matches(&now_start, today()));
    }

    #[test]
    fn test_past_requires_a_successful_booking() {
        let stale = event_at("stale", Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
        let booked = with_successful_participant(event_at(
            "booked",
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        ));
        assert!(!DateFilter::Past.matches(&stale, today()));
        assert!(DateFilter::Past.matches(&booked, today()));
    }

    #[test]
    fn test_bucket_ordering_law() {
        let events = vec![
            event_at("past-old", Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()),
            event_at("up-late", Utc.with_ymd_and_hms(2024, 6, 20, 9, 0, 0).unwrap()),
            event_at("today-pm", Utc.with_ymd_and_hms(2024, 6, 10, 18, 0, 0).unwrap()),
            event_at("past-recent", Utc.with_ymd_and_hms(2024, 6, 8, 9, 0, 0).unwrap()),
            event_at("today-am", Utc.with_ymd_and_hms(2024, 6, 10, 7, 0, 0).unwrap()),
            event_at("up-soon", Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap()),
        ];
        let ordered: Vec<String> = bucket_by_date(&events, today())
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(
            ordered,
            vec![
                "today-am",
                "today-pm",
                "up-soon",
                "up-late",
                "past-recent",
                "past-old"
            ]
        );
    }

    #[test]
    fn test_bucketing_is_stable_among_ties() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 10, 9, 0, 0).unwrap();
        let events = vec![event_at("first", ts), event_at("second", ts), event_at("third", ts)];
        let ordered: Vec<String> = bucket_by_date(&events, today())
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ordered, vec!["first", "second", "third"]);
    }

    proptest! {
        /// Concatenating the buckets yields exactly the input multiset.
        #[test]
        fn prop_bucketing_partitions_without_loss(offsets in prop::collection::vec((-30i64..30, 0u32..24), 0..40)) {
            let events: Vec<Event> = offsets
                .iter()
                .enumerate()
                .map(|(i, (day_offset, hour))| {
                    let base = Utc.with_ymd_and_hms(2024, 6, 10, *hour, 0, 0).unwrap();
                    event_at(&format!("e{}", i), base + Duration::days(*day_offset))
                })
                .collect();

            let ordered = bucket_by_date(&events, today());
            prop_assert_eq!(ordered.len(), events.len());

            let mut input_ids: Vec<String> = events.iter().map(|e| e.id.clone()).collect();
            let mut output_ids: Vec<String> = ordered.iter().map(|e| e.id.clone()).collect();
            input_ids.sort();
            output_ids.sort();
            prop_assert_eq!(input_ids, output_ids);
        }
    }
}
