use clap::ValueEnum;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use derive_more::Display;
use serde::Deserialize;
use std::env;
use tracing::level_filters::LevelFilter;

/// Prefix for environment-variable overrides, e.g. `STATS_ADVISOR__LOGGING__LEVEL`
pub const ENV_PREFIX: &str = "STATS_ADVISOR";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: String,
    pub logging: LoggingSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    /// Pretty-print JSON written to stdout
    pub pretty: bool,
}

/// Verbosity of the stderr log, settable from config files, the environment
/// or `--log-level`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Display, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[display("trace")]
    Trace,
    #[display("debug")]
    Debug,
    #[display("info")]
    Info,
    #[default]
    #[display("warn")]
    #[serde(alias = "warning")]
    #[value(alias = "warning")]
    Warn,
    #[display("error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Shape of each stderr log line
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Display, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event, for log collectors
    #[display("json")]
    Json,
    /// Multi-line, human-oriented output
    #[display("pretty")]
    Pretty,
    #[default]
    #[display("compact")]
    Compact,
}

impl Settings {
    /// Load settings from defaults, optional config files and the environment
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Self::with_defaults(&environment)?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load settings from defaults and a single explicit config file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        Self::with_defaults("development")?
            .add_source(File::with_name(path))
            .build()?
            .try_deserialize()
    }

    fn with_defaults(
        environment: &str,
    ) -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            .set_default("logging.level", LogLevel::default().to_string())?
            .set_default("logging.format", LogFormat::default().to_string())?
            .set_default("output.pretty", true)
    }
}
