//! Tracing subscriber setup
//!
//! Logs always go to stderr so that stdout carries nothing but JSON output.
//! `RUST_LOG`, when set, takes precedence over the configured level.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingSettings};
use crate::error::{Error, Result};
use crate::infrastructure::log_messages;

/// Filter from `RUST_LOG`, falling back to the configured level
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from(settings.level).into())
        .from_env_lossy()
}

/// Install the global subscriber described by `settings`
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr);

    let installed = match settings.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|error| {
        Error::Logging(format!(
            "{}: {error}",
            log_messages::errors::SUBSCRIBER_ALREADY_SET
        ))
    })
}
