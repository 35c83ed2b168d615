//! Tracing subscriber installation.

use crate::config::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directives do not parse.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),
    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Builds the filter for the configured level, ignoring `RUST_LOG`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for malformed directives.
pub fn config_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    Ok(EnvFilter::try_new(&config.level)?)
}

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the configured level when set.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for malformed configured
/// directives, or [`TelemetryError::AlreadyInstalled`] when called more
/// than once per process.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| config_filter(config))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| TelemetryError::AlreadyInstalled(err.to_string()))
}
