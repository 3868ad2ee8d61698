// --- File: crates/meetflow_booking/src/validation.rs ---
//! Booking details validation.
//!
//! Per-field rules mirroring the hosted form: name required (2–100 chars),
//! email required and well-formed, additional info optional (≤500 chars).
//! Failures are collected into a field → message map and never escape the
//! helper as errors.

use crate::models::BookingDetails;
use std::collections::HashMap;

/// Field names used as keys in the error map.
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_ADDITIONAL_INFO: &str = "additionalInfo";

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 100;
const ADDITIONAL_INFO_MAX_LEN: usize = 500;

/// Result of validating the details form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub is_valid: bool,
    /// Field name → first failing message for that field.
    pub errors: HashMap<String, String>,
}

/// Validate the whole details form, collecting one message per failing field.
pub fn validate_booking_details(details: &BookingDetails) -> ValidationOutcome {
    let mut errors = HashMap::new();

    if let Some(message) = validate_name(&details.name) {
        errors.insert(FIELD_NAME.to_string(), message);
    }
    if let Some(message) = validate_email(&details.email) {
        errors.insert(FIELD_EMAIL.to_string(), message);
    }
    if let Some(message) = validate_additional_info(&details.additional_info) {
        errors.insert(FIELD_ADDITIONAL_INFO.to_string(), message);
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Validate a single field by name. Unknown field names pass.
pub fn validate_field(field: &str, value: &str) -> Option<String> {
    match field {
        FIELD_NAME => validate_name(value),
        FIELD_EMAIL => validate_email(value),
        FIELD_ADDITIONAL_INFO => validate_additional_info(value),
        _ => None,
    }
}

fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Name is required".to_string());
    }
    if trimmed.chars().count() < NAME_MIN_LEN {
        return Some(format!("Name must be at least {} characters", NAME_MIN_LEN));
    }
    if trimmed.chars().count() > NAME_MAX_LEN {
        return Some(format!("Name must not exceed {} characters", NAME_MAX_LEN));
    }
    None
}

fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if !looks_like_email(trimmed) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

fn validate_additional_info(additional_info: &str) -> Option<String> {
    if additional_info.trim().chars().count() > ADDITIONAL_INFO_MAX_LEN {
        return Some(format!(
            "Additional information must not exceed {} characters",
            ADDITIONAL_INFO_MAX_LEN
        ));
    }
    None
}

/// Structural email check: one `@`, non-empty local part, domain with an
/// interior dot, no whitespace. The calendar service owns real deliverability.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
