// --- File: crates/meetflow_common/src/services.rs ---
//! Service abstractions for the remote calendar service.
//!
//! This module provides the trait definition for the calendar service used by
//! the widget. The trait allows for dependency injection and easier testing by
//! decoupling the booking flow from the concrete HTTP implementation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A single bookable interval returned by the calendar service.
///
/// Both bounds are ISO 8601 datetime strings and are passed through verbatim;
/// the widget does not validate interval sanity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub start: String,
    pub end: String,
}

/// One attendee of the meeting being booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub email: String,
}

/// Request body for creating a meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub attendees: Vec<Attendee>,
    /// ISO 8601 datetime
    pub start: String,
    /// ISO 8601 datetime
    pub end: String,
}

/// A trait for calendar service operations.
///
/// This trait defines the two calls the widget makes against the calendar
/// service: fetching availability for a date window and creating a meeting.
pub trait CalendarApi: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get bookable slots within a date window (both bounds inclusive).
    fn fetch_availability(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BoxFuture<'_, Vec<AvailabilitySlot>, Self::Error>;

    /// Create a meeting. Returns the created resource as raw JSON.
    fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> BoxFuture<'_, serde_json::Value, Self::Error>;
}
