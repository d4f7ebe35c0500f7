//! Common utilities shared across the order risk analyzer workspace:
//! host configuration loading (YAML), tracing initialization for host
//! executables, and shared test data factories.

pub mod config;

use tracing_subscriber::EnvFilter;

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

// Re-export commonly used test utilities for easier access
#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{generate_unique_order_id, settings_json, write_settings_file};

/// Initialize tracing for a host executable. `RUST_LOG` takes precedence
/// over the configured level.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
