//! Error types for study-design validation and test selection
//!
//! Every failure names the query field(s) responsible so that a caller can
//! point the user at the part of their design description that needs work.

use derive_more::Display;
use serde::Serialize;
use thiserror::Error;

/// Wire-level name of a `StudyDesignQuery` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryField {
    #[display("analysisGoal")]
    AnalysisGoal,
    #[display("measurementLevel")]
    MeasurementLevel,
    #[display("groupCount")]
    GroupCount,
    #[display("sampleRelationship")]
    SampleRelationship,
    #[display("distributionStatus")]
    DistributionStatus,
    #[display("dichotomousPredictorAndOutcome")]
    DichotomousPredictorAndOutcome,
    #[display("ambiguousScale")]
    AmbiguousScale,
    #[display("scaleOverride")]
    ScaleOverride,
    #[display("variableCount")]
    VariableCount,
    #[display("predictorCount")]
    PredictorCount,
    #[display("hasControlGroup")]
    HasControlGroup,
}

/// Structured refusal returned instead of a recommendation
///
/// None of these are panics or best guesses: a wrong statistical test is
/// worse than an explicit refusal, so the engine reports exactly which
/// attributes it could not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind")]
pub enum RecommendationError {
    /// A required attribute was not supplied
    #[error("Missing required field: {field}")]
    MissingField { field: QueryField },

    /// A single attribute holds a value outside its domain
    #[error("Invalid value for {field}: {reason}")]
    InvalidField {
        field: QueryField,
        reason: &'static str,
    },

    /// Attributes are individually valid but jointly nonsensical
    #[error("Incoherent combination of {}: {reason}", field_list(.fields))]
    IncoherentCombination {
        fields: Vec<QueryField>,
        reason: &'static str,
    },

    /// A valid combination the engine deliberately leaves to a richer model
    #[error("Unsupported configuration ({}): {reason}", field_list(.fields))]
    UnsupportedConfiguration {
        fields: Vec<QueryField>,
        reason: &'static str,
    },
}

impl RecommendationError {
    pub fn missing(field: QueryField) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid(field: QueryField, reason: &'static str) -> Self {
        Self::InvalidField { field, reason }
    }

    pub fn incoherent(fields: &[QueryField], reason: &'static str) -> Self {
        Self::IncoherentCombination {
            fields: fields.to_vec(),
            reason,
        }
    }

    pub fn unsupported(fields: &[QueryField], reason: &'static str) -> Self {
        Self::UnsupportedConfiguration {
            fields: fields.to_vec(),
            reason,
        }
    }

    /// Fields the caller has to revisit
    pub fn offending_fields(&self) -> Vec<QueryField> {
        match self {
            Self::MissingField { field } | Self::InvalidField { field, .. } => vec![*field],
            Self::IncoherentCombination { fields, .. }
            | Self::UnsupportedConfiguration { fields, .. } => fields.clone(),
        }
    }

    /// Short machine-readable kind, matching the serialized `kind` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MissingField",
            Self::InvalidField { .. } => "InvalidField",
            Self::IncoherentCombination { .. } => "IncoherentCombination",
            Self::UnsupportedConfiguration { .. } => "UnsupportedConfiguration",
        }
    }
}

fn field_list(fields: &[QueryField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
