// --- File: crates/meetflow_calendar/src/logic.rs ---
//! Page-load availability logic.
//!
//! [`load_availability`] is the widget's page-load function: resolve the
//! target month, compute its calendar bounds, fetch the slots, and downgrade
//! every failure to an empty list. Calendar-service unavailability must never
//! hard-fail the page.

use chrono::{Datelike, Duration, Local, NaiveDate};
use meetflow_booking::url_sync::month_string_to_date;
use meetflow_common::services::{AvailabilitySlot, CalendarApi};
use tracing::error;

/// What the page-load fetch hands to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityPayload {
    pub availability: Vec<AvailabilitySlot>,
}

/// First and last calendar day of the month containing `month`.
pub fn month_range(month: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = month.with_day(1).unwrap_or(month);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month
        .map(|d| d - Duration::days(1))
        .unwrap_or(first);
    (first, last)
}

/// Resolve the month selector: a valid `YYYY-MM` string wins, anything else
/// (absent or unparseable) falls back to the current month.
pub fn resolve_month(month_param: Option<&str>) -> NaiveDate {
    month_param
        .and_then(month_string_to_date)
        .unwrap_or_else(|| Local::now().date_naive())
}

/// Fetch a month's availability for page load.
///
/// On any non-success response, network error, timeout, or malformed body,
/// logs the failure and returns an empty list instead of propagating it.
/// On success the slot list is returned verbatim, with no interval sanity
/// checks.
pub async fn load_availability<A: CalendarApi>(
    api: &A,
    month_param: Option<&str>,
) -> AvailabilityPayload {
    let month = resolve_month(month_param);
    let (start, end) = month_range(month);

    match api.fetch_availability(start, end).await {
        Ok(availability) => AvailabilityPayload { availability },
        Err(err) => {
            error!("Error loading availability: {}", err);
            AvailabilityPayload {
                availability: Vec::new(),
            }
        }
    }
}
