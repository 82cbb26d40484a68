//! Log subscriber setup for binaries and tests that use these models.

use tracing_subscriber::EnvFilter;

use crate::config::{env_vars, logging::DEFAULT_FILTER};

/// Install a global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// Setting `EDGEX_MODELS_LOG_JSON=true` switches to JSON lines. Calling this
/// more than once is harmless; only the first subscriber is installed.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = if env_vars::json_logging() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .compact()
            .with_env_filter(env_filter)
            .with_target(false)
            .try_init()
    };

    if installed.is_ok() {
        tracing::debug!("Logging initialized");
    }
}
