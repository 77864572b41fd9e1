//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Environment variable holding the log filter (e.g. `debug`,
/// `kalkulator_core=trace`).
pub const LOG_ENV: &str = "KALKULATOR_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber, writing to stderr so stdout stays
/// reserved for the screen.
///
/// # Errors
///
/// Returns [`AppError::Logging`] if a subscriber is already installed.
pub fn init() -> AppResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
