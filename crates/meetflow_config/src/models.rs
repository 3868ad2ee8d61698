// --- File: crates/meetflow_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Calendar Service Config ---
// The base URL is a deployment-time value (publicly exposed endpoint);
// never hardcode it per environment in application code.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CalendarConfig {
    pub base_url: String,
    /// Per-request timeout for calendar service calls. Defaults to 8 seconds.
    pub request_timeout_secs: Option<u64>,
}

// --- Event Metadata ---
// Descriptive metadata for the meeting being offered. Display-only; the
// calendar service owns the actual scheduling rules.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct EventConfig {
    pub title: String,
    pub description: String,
    pub location: String,
    pub duration_minutes: u32,
    pub timezone: String,
    pub platform: String,
    pub organization_name: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        EventConfig {
            title: "Meeting with Acme Inc".to_string(),
            description: "Discuss project requirements and next steps.".to_string(),
            location: "123 Business Rd, Business City, BC 12345".to_string(),
            duration_minutes: 30,
            timezone: "Europe/London".to_string(),
            platform: "Google Meet".to_string(),
            organization_name: "Acme Inc".to_string(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Calendar service config is mandatory
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub event: EventConfig,
}
