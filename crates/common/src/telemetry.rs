//! Tracing subscriber setup
//!
//! The embedding shell calls [`init_tracing`] once at startup. `RUST_LOG`
//! from the environment wins over the configured default filter.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global tracing subscriber.
///
/// Uses JSON output when `LOG_FORMAT=json`, human-readable output otherwise.
/// Calling this more than once is harmless; later calls are ignored.
#[mutants::skip] // Installs a process-global subscriber, nothing to assert on
pub fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    let result = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
