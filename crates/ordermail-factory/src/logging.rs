//! Structured logging with tracing
//!
//! Minimal subscriber setup for binaries and tests that want registry and
//! resolution logs. The `ORDERMAIL_LOG` environment variable overrides
//! the level passed in, using the usual `EnvFilter` directive syntax.

use ordermail_domain::error::{Error, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging with the provided default level
///
/// # Errors
/// Returns [`Error::Configuration`] for an unknown level string or when a
/// global subscriber is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let filter = EnvFilter::try_from_env("ORDERMAIL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {e}")))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
