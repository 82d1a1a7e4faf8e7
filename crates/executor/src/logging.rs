//! Logging capability.
//!
//! The executor never installs a global subscriber. The host builds a
//! [`Dispatch`] once at startup and hands it to
//! [`Executor::with_config`](crate::Executor::with_config); every invocation
//! then runs with that dispatch as its default.

use tracing::Dispatch;

use crate::config::{ConfigError, LoggingConfig};

/// Build a formatted-output dispatch from logging settings.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if the level is unknown.
pub fn build_dispatch(config: &LoggingConfig) -> Result<Dispatch, ConfigError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.max_level()?)
        .with_target(config.target)
        .finish();
    Ok(Dispatch::new(subscriber))
}

/// Like [`build_dispatch`], writing through the test harness capture.
pub fn build_test_dispatch(config: &LoggingConfig) -> Result<Dispatch, ConfigError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(config.max_level()?)
        .with_target(config.target)
        .with_test_writer()
        .finish();
    Ok(Dispatch::new(subscriber))
}

/// A dispatch that discards everything.
pub fn silent() -> Dispatch {
    Dispatch::none()
}
