// File: services/meetflow_widget/src/main.rs
//! Composition root for the booking widget.
//!
//! Wires configuration, logging, the calendar client, the booking store, and
//! URL synchronization together, then runs the page-load availability fetch.
//! The first CLI argument stands in for the browser's query string, e.g.
//! `meetflow-widget "month=2025-07&timeSlot=2025-07-15T10:00"`.

use meetflow_booking::url_sync::{date_to_month_string, MONTH_PARAM};
use meetflow_booking::{attach_url_sync, BookingStore, InMemoryUrlStore, UrlStore};
use meetflow_calendar::{load_availability, CalendarClient};
use meetflow_common::{config_error, logging, MeetflowError};
use meetflow_config::load_config;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), MeetflowError> {
    logging::init();
    let config = Arc::new(load_config().map_err(config_error)?);

    let query = std::env::args().nth(1).unwrap_or_default();
    let url_store: Arc<dyn UrlStore> = Arc::new(InMemoryUrlStore::from_query(&query));

    // Seed the store from the URL, then keep the URL in lockstep with it
    let store = Arc::new(BookingStore::from_url(url_store.as_ref()));
    let _url_sync = attach_url_sync(&store, url_store.clone());

    let client = CalendarClient::from_config(&config.calendar)?;
    info!(base_url = client.base_url(), "calendar client ready");
    info!(
        title = %config.event.title,
        duration_minutes = config.event.duration_minutes,
        platform = %config.event.platform,
        "offering"
    );

    // Page-load fetch: never fails the page, worst case an empty month
    store.set_loading_availability(true);
    let params = url_store.read();
    let payload = load_availability(&client, params.get(MONTH_PARAM)).await;
    store.set_availability(payload.availability);

    info!(
        month = %date_to_month_string(store.current_month()),
        slots = store.availability().len(),
        slot_chosen = store.has_selected_slot(),
        "booking widget ready"
    );
    info!(query = %url_store.read().to_query_string(), "persisted state");
    Ok(())
}
