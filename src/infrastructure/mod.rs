//! Infrastructure layer for the stats advisor
//!
//! Logging setup and the log message catalogue live here; nothing in this
//! layer makes recommendation decisions.

pub mod log_messages;
pub mod logging;

pub use logging::init_logging;
