// --- File: crates/meetflow_booking/src/lib.rs ---
// Declare modules within this crate
pub mod models;
pub mod store;
#[cfg(test)]
mod store_test;
pub mod sync;
pub mod url_sync;
#[cfg(test)]
mod url_sync_proptest;
pub mod validation;

pub use models::{BookingDetails, BookingState, BookingStep};
pub use store::{BookingStore, StateChange, SubscriptionId};
pub use sync::attach_url_sync;
pub use url_sync::{InMemoryUrlStore, NoopUrlStore, QueryParams, UrlStore};
