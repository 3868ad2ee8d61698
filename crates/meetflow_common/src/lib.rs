// --- File: crates/meetflow_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // Shared HTTP client
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{config_error, external_service_error, Context, MeetflowError};

// Re-export HTTP utilities for easier access
pub use http::{create_client, DEFAULT_TIMEOUT_SECS};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
