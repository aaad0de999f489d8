//! PlayDesk booking client
//!
//! Main application entry point: loads configuration, connects to the
//! booking API, fetches the event collection and prints the filtered
//! listing for the configured default selections.

use chrono::Utc;
use tracing::{info, warn};

use PlayDesk::{
    config::Settings,
    filters::{self, DateFilter, FilterState, Selection},
    models::Event,
    services::ServiceFactory,
    state::EventStore,
    utils::{helpers, logging},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting {}...", PlayDesk::info());

    // Initialize API services
    let services = ServiceFactory::new(settings.clone())?;

    // Fetch the event collection
    info!("Fetching events from {}...", settings.api.base_url);
    let mut store = EventStore::new(services.event_service.clone());
    store.refresh().await?;
    info!(
        events = store.events().len(),
        sports = store.available_sports().len(),
        "Event collection loaded"
    );

    // Derive the filter facets from the unfiltered collection
    let cities = filters::available_cities(store.events());
    let filter_state = FilterState {
        sport: Selection::parse(&settings.listing.default_sport),
        date_filter: DateFilter::parse(&settings.listing.default_date_filter),
        ..FilterState::default()
    };
    let venues = filters::available_venues(store.events(), &filter_state.city);
    info!(
        cities = cities.len(),
        venues = venues.len(),
        "Filter facets derived"
    );

    // Apply the filter pipeline and order the result by date bucket
    let today = Utc::now().date_naive();
    let visible = filters::apply(&filter_state, store.events(), today);
    let ordered = filters::bucket_by_date(&visible, today);

    if ordered.is_empty() {
        warn!(
            sport = filter_state.sport.as_str(),
            date_filter = filter_state.date_filter.as_str(),
            "No games found for the selected filters"
        );
    } else {
        println!(
            "Showing {} of {} events ({}, {})",
            ordered.len(),
            store.events().len(),
            helpers::capitalize(filter_state.sport.as_str()),
            filter_state.date_filter.as_str()
        );
        for event in &ordered {
            print_listing_line(event);
        }
    }

    info!("PlayDesk client finished.");
    Ok(())
}

/// Print one listing card as a terminal line
fn print_listing_line(event: &Event) {
    println!(
        "  {} | {} {} | {} | {} | INR {} | {}",
        event.name,
        event.location,
        event.venue_name,
        helpers::format_event_date(event.date),
        event.slot,
        event.price,
        helpers::slots_left_label(event.slots_left),
    );
}
