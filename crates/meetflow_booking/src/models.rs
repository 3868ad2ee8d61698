// --- File: crates/meetflow_booking/src/models.rs ---
use chrono::{Local, NaiveDate, NaiveDateTime};
use meetflow_common::services::AvailabilitySlot;
use serde::{Deserialize, Serialize};

/// The three linear stages of the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingStep {
    DateTime,
    Details,
    Confirmation,
}

/// Attendee details entered in the Details step.
///
/// `guests` preserves insertion order across add/remove.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub name: String,
    pub email: String,
    pub additional_info: String,
    pub guests: Vec<String>,
}

/// The single mutable aggregate behind the wizard, owned exclusively by
/// [`crate::store::BookingStore`]. Mutated only through the store's named
/// operations; discarded at the end of the session (the URL query string is
/// the only persistence).
#[derive(Debug, Clone, PartialEq)]
pub struct BookingState {
    pub current_step: BookingStep,
    /// The calendar month currently displayed.
    pub current_month: NaiveDate,
    /// Combined date + time of the chosen slot, if any.
    pub selected_time_slot: Option<NaiveDateTime>,
    pub booking_details: BookingDetails,
    /// True once the wizard reaches Confirmation.
    pub is_complete: bool,
    /// Slots returned by the calendar service for the current month,
    /// in service order.
    pub availability: Vec<AvailabilitySlot>,
    pub is_loading_availability: bool,
}

impl BookingState {
    /// The aggregate as it looks at the start of a session with no URL
    /// parameters: DateTime step, today's month, nothing selected.
    pub fn initial() -> Self {
        BookingState {
            current_step: BookingStep::DateTime,
            current_month: Local::now().date_naive(),
            selected_time_slot: None,
            booking_details: BookingDetails::default(),
            is_complete: false,
            availability: Vec::new(),
            is_loading_availability: false,
        }
    }
}

impl Default for BookingState {
    fn default() -> Self {
        Self::initial()
    }
}
