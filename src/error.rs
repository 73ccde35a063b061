use crate::domain::RecommendationError;
use thiserror::Error;

/// Stats Advisor application error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Recommendation refused: {0}")]
    Recommendation(#[from] RecommendationError),

    #[error("Logging initialisation error: {0}")]
    Logging(String),

    #[error("Empty input: no study design query was supplied")]
    EmptyInput,
}

impl Error {
    /// The structured refusal behind this error, if it came from the engine
    pub fn as_recommendation_error(&self) -> Option<&RecommendationError> {
        match self {
            Error::Recommendation(error) => Some(error),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
