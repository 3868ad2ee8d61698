//! Logging utilities for the Meetflow widget.
//!
//! This module provides a standardized approach to logging across all crates
//! in the workspace. The composition root calls [`init`] once at startup;
//! everything else just uses the `tracing` macros.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Uses `RUST_LOG` when set, with a `meetflow` directive at the given level
/// as the baseline. Safe to call more than once: a second call is a no-op.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("meetflow={}", level).parse().expect("valid directive"));

    // Use try_init to handle the case where a global default subscriber has already been set
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
