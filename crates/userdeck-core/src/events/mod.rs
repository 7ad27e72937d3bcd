//! Application lifecycle and record-source events.
//!
//! Shared between the UI binary and the core so that startup, shutdown and
//! source loads produce the same structured event names everywhere.

use tracing::{error, info, warn};

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_shutdown() {
    info!(event = "core.app.shutdown_started");
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// A record source finished loading.
pub fn log_records_loaded(source: &str, count: usize) {
    info!(event = "core.source.load_completed", source = source, count = count);
}

/// A record source failed to load; the UI will show the unavailable state.
pub fn log_records_unavailable(source: &str, error: &dyn std::error::Error) {
    warn!(
        event = "core.source.load_failed",
        source = source,
        error = %error
    );
}
