// --- File: crates/meetflow_calendar/src/client.rs ---
//! HTTP client for the calendar service.
//!
//! Two endpoints: `GET /api/availability` (bookable slots for a date window)
//! and `POST /api/meetings` (create a meeting). The client carries its own
//! `reqwest::Client` configured with the per-request timeout from config.

use crate::error::CalendarError;
use chrono::NaiveDate;
use meetflow_common::http::{create_client, DEFAULT_TIMEOUT_SECS};
use meetflow_common::services::{AvailabilitySlot, CreateBookingRequest};
use meetflow_config::CalendarConfig;
use reqwest::{header, Client};
use tracing::{debug, error};

/// Client for the remote calendar service.
pub struct CalendarClient {
    /// HTTP client with the configured timeout baked in
    client: Client,
    /// Base URL of the calendar service, without a trailing slash
    base_url: String,
}

impl CalendarClient {
    /// Creates a new client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        Ok(CalendarClient {
            client: create_client(timeout_secs, true)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from the calendar section of the app config.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            &config.base_url,
            config.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches bookable slots between `start` and `end` (inclusive calendar
    /// days).
    ///
    /// Fails on network errors, timeouts, non-2xx statuses, and malformed
    /// bodies. Callers that must never fail the page (the page-load path) go
    /// through [`crate::logic::load_availability`], which downgrades every
    /// failure to an empty list.
    pub async fn fetch_availability(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AvailabilitySlot>, CalendarError> {
        let url = format!("{}/api/availability", self.base_url);
        debug!(%start, %end, "fetching availability");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("start", start.format("%Y-%m-%d").to_string()),
                ("end", end.format("%Y-%m-%d").to_string()),
            ])
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "failed to fetch availability");
            return Err(CalendarError::ApiError {
                status_code: status.as_u16(),
            });
        }

        let slots: Vec<AvailabilitySlot> = response.json().await?;
        Ok(slots)
    }

    /// Posts a finalized booking and returns the created resource as JSON.
    ///
    /// A single POST with no retry and no idempotency key: a duplicate
    /// submission (e.g. a double-click) can create duplicate meetings. Any
    /// non-success status surfaces as [`CalendarError::BookingFailed`] with
    /// its fixed message; the caller presents it.
    pub async fn create_booking(
        &self,
        request: &CreateBookingRequest,
    ) -> Result<serde_json::Value, CalendarError> {
        let url = format!("{}/api/meetings", self.base_url);
        debug!(start = %request.start, end = %request.end, attendees = request.attendees.len(), "creating booking");

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), "meeting creation rejected");
            return Err(CalendarError::BookingFailed);
        }

        let created: serde_json::Value = response.json().await?;
        Ok(created)
    }
}
