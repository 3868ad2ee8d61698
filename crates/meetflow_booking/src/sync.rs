// --- File: crates/meetflow_booking/src/sync.rs ---
//! URL synchronization observer.
//!
//! The store stays side-effect-free; this observer, attached by the
//! composition root, maps navigable state changes onto query-parameter
//! writes. Notification is synchronous within the mutating call, so the URL
//! never lags the aggregate.

use crate::store::{BookingStore, StateChange, SubscriptionId};
use crate::url_sync::{
    date_to_month_string, date_to_time_slot_string, UrlStore, MONTH_PARAM, TIME_SLOT_PARAM,
};
use std::sync::Arc;

/// Attach URL synchronization to a store.
///
/// - a month change writes `month`
/// - a time-slot change writes `month` and sets or deletes `timeSlot`
/// - a reset deletes both parameters
///
/// Other changes (step, details, availability, loading) are not navigable and
/// leave the URL untouched. Returns the subscription handle so the caller can
/// detach the observer.
pub fn attach_url_sync(store: &BookingStore, url: Arc<dyn UrlStore>) -> SubscriptionId {
    store.subscribe(move |state, change| match change {
        StateChange::Month => {
            url.update(&[(MONTH_PARAM, Some(date_to_month_string(state.current_month)))]);
        }
        StateChange::TimeSlot => {
            url.update(&[
                (MONTH_PARAM, Some(date_to_month_string(state.current_month))),
                (
                    TIME_SLOT_PARAM,
                    state.selected_time_slot.map(date_to_time_slot_string),
                ),
            ]);
        }
        StateChange::Reset => {
            url.update(&[(MONTH_PARAM, None), (TIME_SLOT_PARAM, None)]);
        }
        _ => {}
    })
}
