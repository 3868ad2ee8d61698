// --- File: crates/meetflow_calendar/src/error.rs ---
use thiserror::Error;

/// Calendar-service-specific error types.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Error occurred during an HTTP request to the calendar service
    /// (network failure, timeout, or an unreadable body)
    #[error("Calendar API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-success status returned by the availability endpoint
    #[error("Calendar API returned an error (Status: {status_code})")]
    ApiError { status_code: u16 },

    /// Error parsing a calendar API response body
    #[error("Failed to parse calendar API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The meeting endpoint rejected the booking. The message is fixed and
    /// non-descriptive; the caller decides how to present it.
    #[error("Failed to create booking")]
    BookingFailed,
}
