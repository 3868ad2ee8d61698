// --- File: crates/meetflow_booking/src/url_sync.rs ---
//! URL parameter codec and the location seam.
//!
//! The codec is a pure, reversible mapping between date values and the two
//! query parameters the widget persists: `month` (`YYYY-MM`) and `timeSlot`
//! (`YYYY-MM-DDTHH:mm`). Decoding an invalid string yields `None`, never an
//! error; encoding has no failure mode.
//!
//! [`UrlStore`] abstracts the browser location so the store and its tests can
//! run against an in-memory query string. Writes are history replacements,
//! never new entries.

use chrono::{Local, NaiveDate, NaiveDateTime};
use std::sync::Mutex;

/// Query parameter holding the displayed month.
pub const MONTH_PARAM: &str = "month";
/// Query parameter holding the selected time slot.
pub const TIME_SLOT_PARAM: &str = "timeSlot";

// --- Codec ---

/// Convert a date to a month string (`YYYY-MM`).
pub fn date_to_month_string(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Convert a month string (`YYYY-MM`) to the first day of that month.
/// Returns `None` for anything that does not parse.
pub fn month_string_to_date(month_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month_str), "%Y-%m-%d").ok()
}

/// Convert a combined date + time to the `timeSlot` form (`YYYY-MM-DDTHH:mm`).
pub fn date_to_time_slot_string(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%dT%H:%M").to_string()
}

/// Convert a `timeSlot` string back to a date + time.
/// Returns `None` for anything that does not parse.
pub fn time_slot_string_to_date(time_slot_str: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(time_slot_str, "%Y-%m-%dT%H:%M").ok()
}

/// The current month, encoded.
pub fn current_month_string() -> String {
    date_to_month_string(Local::now().date_naive())
}

// --- Query string handling ---

/// An ordered key/value view of a URL query string.
///
/// Keys the widget does not own are preserved untouched, in their original
/// position. An unparseable query string is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string (a leading `?` is tolerated).
    pub fn parse(query: &str) -> Self {
        let trimmed = query.trim_start_matches('?');
        serde_urlencoded::from_str::<Vec<(String, String)>>(trimmed)
            .map(|pairs| QueryParams { pairs })
            .unwrap_or_default()
    }

    /// Serialize back to a query string (without a leading `?`).
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.pairs).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a key, replacing an existing value in place or appending.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Merge `updates` into `params`: `Some(value)` sets the key, `None` deletes
/// it, and keys not mentioned are left untouched.
pub fn update_url_params(params: &mut QueryParams, updates: &[(&str, Option<String>)]) {
    for (key, value) in updates {
        match value {
            Some(value) => params.set(key, value.clone()),
            None => params.remove(key),
        }
    }
}

// --- Location seam ---

/// The browser-location seam: somewhere the current query string lives.
///
/// `replace` is a history replacement (no new entry, no scroll reset).
pub trait UrlStore: Send + Sync {
    fn read(&self) -> QueryParams;
    fn replace(&self, params: QueryParams);

    /// Read-modify-replace with [`update_url_params`] merge semantics.
    fn update(&self, updates: &[(&str, Option<String>)]) {
        let mut params = self.read();
        update_url_params(&mut params, updates);
        self.replace(params);
    }
}

/// An in-memory stand-in for the browser location, used by the composition
/// root and by tests.
#[derive(Debug, Default)]
pub struct InMemoryUrlStore {
    params: Mutex<QueryParams>,
}

impl InMemoryUrlStore {
    pub fn new(params: QueryParams) -> Self {
        InMemoryUrlStore {
            params: Mutex::new(params),
        }
    }

    pub fn from_query(query: &str) -> Self {
        Self::new(QueryParams::parse(query))
    }
}

impl UrlStore for InMemoryUrlStore {
    fn read(&self) -> QueryParams {
        self.params
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn replace(&self, params: QueryParams) {
        *self
            .params
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = params;
    }
}

/// A location that ignores everything: reads are empty, writes are dropped.
/// This is the "not running in a browser context" no-op.
#[derive(Debug, Default)]
pub struct NoopUrlStore;

impl UrlStore for NoopUrlStore {
    fn read(&self) -> QueryParams {
        QueryParams::new()
    }

    fn replace(&self, _params: QueryParams) {}
}
