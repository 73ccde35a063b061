//! Log message constants
//!
//! Centralizes the messages emitted by the application and CLI layers so they
//! stay consistent between call sites and tests.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting stats advisor";
    pub const SETTINGS_LOADED: &str = "Settings loaded";
    pub const READING_INPUT: &str = "Reading study design queries";
}

/// Recommendation processing messages
pub mod recommendation {
    pub const BATCH_RECEIVED: &str = "Study design batch received";
    pub const QUERY_RECOMMENDED: &str = "Recommendation produced";
    pub const QUERY_REFUSED: &str = "Study design refused";
    pub const QUERY_AMBIGUOUS: &str = "Recommendation is ambiguous";
}

/// Error messages for infrastructure components
pub mod errors {
    pub const EMPTY_INPUT: &str = "No study design query was supplied";
    pub const SUBSCRIBER_ALREADY_SET: &str = "A global tracing subscriber is already installed";
}
