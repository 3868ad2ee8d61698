// --- File: crates/meetflow_calendar/src/service.rs ---
//! [`CalendarApi`] implementation for the HTTP client.
//!
//! Lets the composition root and tests depend on the trait instead of the
//! concrete client.

use crate::client::CalendarClient;
use crate::error::CalendarError;
use chrono::NaiveDate;
use meetflow_common::services::{AvailabilitySlot, BoxFuture, CalendarApi, CreateBookingRequest};

impl CalendarApi for CalendarClient {
    type Error = CalendarError;

    fn fetch_availability(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BoxFuture<'_, Vec<AvailabilitySlot>, Self::Error> {
        Box::pin(async move { CalendarClient::fetch_availability(self, start, end).await })
    }

    fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> BoxFuture<'_, serde_json::Value, Self::Error> {
        Box::pin(async move { CalendarClient::create_booking(self, &request).await })
    }
}
