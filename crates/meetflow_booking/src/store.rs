// --- File: crates/meetflow_booking/src/store.rs ---
//! The booking wizard state machine.
//!
//! [`BookingStore`] owns the [`BookingState`] aggregate and exposes the named
//! mutation operations. The store itself is side-effect-free: every mutation
//! commits atomically and then synchronously notifies subscribers with the
//! committed state and a [`StateChange`] tag. URL persistence is one such
//! subscriber (see [`crate::sync`]), attached by the composition root —
//! because notification happens inside the mutating call, URL and in-memory
//! state cannot diverge after a setter returns.
//!
//! Mutations are serialized by an internal mutex, the stand-in for the
//! original single-UI-thread execution model: one mutation fully applies
//! before the next begins.

use crate::models::{BookingDetails, BookingState, BookingStep};
use crate::url_sync::{
    month_string_to_date, time_slot_string_to_date, MONTH_PARAM, TIME_SLOT_PARAM,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use meetflow_common::services::AvailabilitySlot;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Which named operation produced a committed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Step,
    Month,
    TimeSlot,
    Details,
    Availability,
    Loading,
    Reset,
}

/// Handle returned by [`BookingStore::subscribe`]; pass it back to
/// [`BookingStore::unsubscribe`] to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&BookingState, StateChange) + Send + Sync>;

/// The in-memory store for the booking wizard.
pub struct BookingStore {
    state: Mutex<BookingState>,
    subscribers: Mutex<Vec<(u64, Subscriber)>>,
    next_subscriber_id: AtomicU64,
}

impl BookingStore {
    /// Create a store with the default initial aggregate.
    pub fn new() -> Self {
        Self::with_state(BookingState::initial())
    }

    /// Create a store with an explicit starting aggregate.
    pub fn with_state(state: BookingState) -> Self {
        BookingStore {
            state: Mutex::new(state),
            subscribers: Mutex::new(Vec::new()),
            next_subscriber_id: AtomicU64::new(0),
        }
    }

    /// Create a store seeded from the URL parameters.
    ///
    /// `month` and `timeSlot` are decoded when present; anything invalid falls
    /// back to the defaults (current month, no slot). When `month` was absent
    /// the current month is written back to the URL so a reload lands on the
    /// same view.
    pub fn from_url(url: &dyn crate::url_sync::UrlStore) -> Self {
        let params = url.read();
        let mut state = BookingState::initial();

        if let Some(month) = params.get(MONTH_PARAM).and_then(month_string_to_date) {
            state.current_month = month;
        }
        state.selected_time_slot = params
            .get(TIME_SLOT_PARAM)
            .and_then(time_slot_string_to_date);

        if params.get(MONTH_PARAM).is_none() {
            url.update(&[(
                MONTH_PARAM,
                Some(crate::url_sync::date_to_month_string(state.current_month)),
            )]);
        }

        Self::with_state(state)
    }

    // --- Subscription lifecycle ---

    /// Register a subscriber called synchronously after every committed
    /// mutation, with the committed state and the change tag.
    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(&BookingState, StateChange) + Send + Sync + 'static,
    {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.lock_subscribers().push((id, Arc::new(subscriber)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock_subscribers().retain(|(sid, _)| *sid != id.0);
    }

    // --- Step navigation ---

    pub fn go_to_details(&self) {
        self.commit(StateChange::Step, |state| {
            state.current_step = BookingStep::Details;
        });
    }

    pub fn go_to_date_time(&self) {
        self.commit(StateChange::Step, |state| {
            state.current_step = BookingStep::DateTime;
        });
    }

    /// Completes the wizard. Terminal for the session.
    pub fn go_to_confirmation(&self) {
        self.commit(StateChange::Step, |state| {
            state.current_step = BookingStep::Confirmation;
            state.is_complete = true;
        });
    }

    /// Arbitrary direct jump. The store does not police step order; callers
    /// own the linear-flow rules.
    pub fn set_step(&self, step: BookingStep) {
        self.commit(StateChange::Step, |state| {
            state.current_step = step;
        });
    }

    // --- Month navigation ---

    pub fn set_month(&self, month: NaiveDate) {
        self.commit(StateChange::Month, |state| {
            state.current_month = month;
        });
    }

    // --- Time slot selection ---

    /// Select (or clear) the combined date + time slot.
    ///
    /// Membership of the slot in the current availability list is
    /// deliberately not enforced here; the calendar service re-validates on
    /// booking. A debug log makes the mismatch observable.
    pub fn set_time_slot(&self, time_slot: Option<NaiveDateTime>) {
        self.commit(StateChange::TimeSlot, |state| {
            if let Some(chosen) = time_slot {
                let listed = state
                    .availability
                    .iter()
                    .any(|slot| slot_starts_at(slot, chosen));
                if !state.availability.is_empty() && !listed {
                    debug!(slot = %chosen, "selected time slot is not in the fetched availability");
                }
            }
            state.selected_time_slot = time_slot;
        });
    }

    // --- Booking details ---

    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.commit(StateChange::Details, |state| {
            state.booking_details.name = name;
        });
    }

    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.commit(StateChange::Details, |state| {
            state.booking_details.email = email;
        });
    }

    pub fn set_additional_info(&self, additional_info: impl Into<String>) {
        let additional_info = additional_info.into();
        self.commit(StateChange::Details, |state| {
            state.booking_details.additional_info = additional_info;
        });
    }

    pub fn set_guests(&self, guests: Vec<String>) {
        self.commit(StateChange::Details, |state| {
            state.booking_details.guests = guests;
        });
    }

    pub fn add_guest(&self, guest: impl Into<String>) {
        let guest = guest.into();
        self.commit(StateChange::Details, |state| {
            state.booking_details.guests.push(guest);
        });
    }

    /// Remove the guest at `index`; out-of-range indexes are ignored.
    /// Remaining guests keep their insertion order.
    pub fn remove_guest(&self, index: usize) {
        self.commit(StateChange::Details, |state| {
            if index < state.booking_details.guests.len() {
                state.booking_details.guests.remove(index);
            }
        });
    }

    // --- Availability ---

    /// Replace the availability list. Also ends the loading state, since the
    /// list always arrives as the resolution of the in-flight fetch.
    pub fn set_availability(&self, availability: Vec<AvailabilitySlot>) {
        self.commit(StateChange::Availability, |state| {
            state.availability = availability;
            state.is_loading_availability = false;
        });
    }

    pub fn set_loading_availability(&self, is_loading: bool) {
        self.commit(StateChange::Loading, |state| {
            state.is_loading_availability = is_loading;
        });
    }

    /// Restore the initial aggregate. Subscribers see [`StateChange::Reset`];
    /// the URL observer clears both parameters on it.
    pub fn reset(&self) {
        self.commit(StateChange::Reset, |state| {
            *state = BookingState::initial();
        });
    }

    // --- Derived read views (recomputed per read, never cached) ---

    /// A full clone of the committed aggregate.
    pub fn snapshot(&self) -> BookingState {
        self.lock_state().clone()
    }

    pub fn current_step(&self) -> BookingStep {
        self.lock_state().current_step
    }

    pub fn current_month(&self) -> NaiveDate {
        self.lock_state().current_month
    }

    pub fn selected_time_slot(&self) -> Option<NaiveDateTime> {
        self.lock_state().selected_time_slot
    }

    pub fn booking_details(&self) -> BookingDetails {
        self.lock_state().booking_details.clone()
    }

    pub fn availability(&self) -> Vec<AvailabilitySlot> {
        self.lock_state().availability.clone()
    }

    pub fn is_loading_availability(&self) -> bool {
        self.lock_state().is_loading_availability
    }

    pub fn is_complete(&self) -> bool {
        self.lock_state().is_complete
    }

    /// Minimal gate for advancing past the Details step: a non-empty name and
    /// an email containing `@`. Full per-field validation lives in
    /// [`crate::validation`].
    pub fn is_details_valid(&self) -> bool {
        let state = self.lock_state();
        !state.booking_details.name.trim().is_empty()
            && state.booking_details.email.contains('@')
    }

    pub fn has_selected_slot(&self) -> bool {
        self.lock_state().selected_time_slot.is_some()
    }

    // --- Internals ---

    /// Apply a mutation under the state lock, then notify subscribers with a
    /// snapshot of the committed state. Subscribers run outside both locks so
    /// they may call back into the store.
    fn commit<F: FnOnce(&mut BookingState)>(&self, change: StateChange, apply: F) {
        let snapshot = {
            let mut state = self.lock_state();
            apply(&mut *state);
            (*state).clone()
        };
        let subscribers: Vec<Subscriber> = self
            .lock_subscribers()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(&snapshot, change);
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, BookingState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, Vec<(u64, Subscriber)>> {
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a service slot starts at the chosen local time. Service timestamps
/// are RFC 3339; the widget's slots are naive, so both the UTC and the local
/// reading are accepted.
fn slot_starts_at(slot: &AvailabilitySlot, chosen: NaiveDateTime) -> bool {
    match DateTime::parse_from_rfc3339(&slot.start) {
        Ok(start) => start.naive_utc() == chosen || start.naive_local() == chosen,
        Err(_) => time_slot_string_to_date(&slot.start) == Some(chosen),
    }
}
