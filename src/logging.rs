//! Tracing setup for the command-line binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter, e.g. `smartsave=debug`
pub const LOG_ENV: &str = "SMARTSAVE_LOG";

static TRACING_INIT: Once = Once::new();

/// Build the filter: `SMARTSAVE_LOG` when set and valid, else `default_filter`
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("smartsave=warn"))
}

/// Initializes the global tracing subscriber, writing to stderr
///
/// Only the first call has any effect.
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        // Another subscriber may already be installed by an embedding test harness
        if let Err(e) = install(build_filter(default_filter)) {
            tracing::debug!(error = %e, "keeping the existing tracing subscriber");
        }
    });
}

/// Install the stderr subscriber globally; fails if one is already set
fn install(filter: EnvFilter) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
