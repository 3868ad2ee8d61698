// --- File: crates/meetflow_calendar/src/lib.rs ---
// Declare modules within this crate
pub mod client;
pub mod error;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod service;

pub use client::CalendarClient;
pub use error::CalendarError;
pub use logic::{load_availability, month_range, AvailabilityPayload};
