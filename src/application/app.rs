use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::Settings;
use crate::domain::{self, Recommendation, RecommendationError, StudyDesignQuery};
use crate::error::{Error, Result};
use crate::infrastructure::log_messages;

/// Result for one query: the recommendation, or the reason it was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Recommended(Recommendation),
    Refused { error: RecommendationError },
}

impl Outcome {
    pub fn is_refused(&self) -> bool {
        matches!(self, Outcome::Refused { .. })
    }
}

impl From<std::result::Result<Recommendation, RecommendationError>> for Outcome {
    fn from(result: std::result::Result<Recommendation, RecommendationError>) -> Self {
        match result {
            Ok(recommendation) => Outcome::Recommended(recommendation),
            Err(error) => Outcome::Refused { error },
        }
    }
}

/// Outcomes for everything read from one input document
///
/// A document holding a single query serializes to a single outcome; a
/// document holding an array serializes to an array in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<Outcome>,
    batch: bool,
}

impl Report {
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn refused_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_refused()).count()
    }

    pub fn has_refusals(&self) -> bool {
        self.refused_count() > 0
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = match (self.batch, self.outcomes.as_slice()) {
            (false, [single]) => encode(single, pretty)?,
            _ => encode(&self.outcomes, pretty)?,
        };
        Ok(json)
    }
}

fn encode<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Main application struct that coordinates all components
#[derive(Debug, Clone)]
pub struct Application {
    settings: Settings,
}

impl Application {
    #[instrument]
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        debug!(
            environment = %settings.environment,
            "{}",
            log_messages::application::SETTINGS_LOADED
        );
        Ok(Self::with_settings(settings))
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Adjust settings after loading, e.g. from command-line flags
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Recommend for a query already in memory
    pub fn recommend(&self, query: &StudyDesignQuery) -> Result<Recommendation> {
        Ok(domain::recommend(query)?)
    }

    /// Decode one query or an array of queries and recommend for each
    #[instrument(skip_all, fields(bytes = input.len()))]
    pub fn recommend_json(&self, input: &str) -> Result<Report> {
        let trimmed = input.trim_start();
        if trimmed.is_empty() {
            warn!("{}", log_messages::errors::EMPTY_INPUT);
            return Err(Error::EmptyInput);
        }

        let (queries, batch) = if trimmed.starts_with('[') {
            (serde_json::from_str::<Vec<StudyDesignQuery>>(trimmed)?, true)
        } else {
            (vec![serde_json::from_str::<StudyDesignQuery>(trimmed)?], false)
        };
        info!(
            queries = queries.len(),
            batch,
            "{}",
            log_messages::recommendation::BATCH_RECEIVED
        );

        let outcomes = queries.iter().map(recommend_one).collect();
        Ok(Report { outcomes, batch })
    }

    pub fn recommend_reader<R: Read>(&self, mut reader: R) -> Result<Report> {
        debug!("{}", log_messages::application::READING_INPUT);
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        self.recommend_json(&input)
    }

    pub fn recommend_file(&self, path: &Path) -> Result<Report> {
        debug!(path = %path.display(), "{}", log_messages::application::READING_INPUT);
        let input = fs::read_to_string(path)?;
        self.recommend_json(&input)
    }

    pub fn render(&self, report: &Report) -> Result<String> {
        report.to_json(self.settings.output.pretty)
    }

    /// The procedure catalogue as JSON
    pub fn catalogue_json(&self) -> Result<String> {
        Ok(encode(&domain::catalogue(), self.settings.output.pretty)?)
    }
}

fn recommend_one(query: &StudyDesignQuery) -> Outcome {
    let outcome = Outcome::from(domain::recommend(query));
    match &outcome {
        Outcome::Recommended(recommendation) => {
            info!(
                primary = recommendation.primary().procedure_name,
                alternates = recommendation.alternates().count(),
                "{}",
                log_messages::recommendation::QUERY_RECOMMENDED
            );
            if let Some(warning) = recommendation.ambiguity_warning() {
                warn!(%warning, "{}", log_messages::recommendation::QUERY_AMBIGUOUS);
            }
        }
        Outcome::Refused { error } => {
            warn!(kind = error.kind(), %error, "{}", log_messages::recommendation::QUERY_REFUSED);
        }
    }
    outcome
}
