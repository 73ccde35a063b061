//! Raw study-design queries as supplied by callers
//!
//! Every attribute is optional on the wire. Deciding that something is
//! missing is the engine's job, not the deserializer's, so that the caller
//! gets a structured `MissingField` naming the attribute instead of a parse
//! error.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Whether the study looks for a difference between groups or an
/// association between variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisGoal {
    #[display("DIFFERENCE")]
    Difference,
    #[display("ASSOCIATION")]
    Association,
}

/// Level of measurement of the dependent variable (or of the correlated pair)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementLevel {
    /// Unordered categories
    #[display("NOMINAL")]
    Nominal,
    /// Ranked categories with unequal intervals
    #[display("ORDINAL")]
    Ordinal,
    /// Equal intervals, continuous
    #[display("INTERVAL_RATIO")]
    IntervalRatio,
}

/// Independent groups or repeated/matched measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SampleRelationship {
    #[display("INDEPENDENT")]
    Independent,
    #[display("PAIRED")]
    Paired,
}

/// What is known about the distribution of interval/ratio data
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistributionStatus {
    #[display("NORMAL")]
    Normal,
    #[display("NON_NORMAL")]
    NonNormal,
    #[default]
    #[display("UNKNOWN")]
    Unknown,
}

/// Caller decision for a summed rating scale that sits between ordinal and
/// interval measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleOverride {
    #[display("TREAT_AS_ORDINAL")]
    TreatAsOrdinal,
    #[display("TREAT_AS_INTERVAL")]
    TreatAsInterval,
}

impl ScaleOverride {
    pub fn level(self) -> MeasurementLevel {
        match self {
            ScaleOverride::TreatAsOrdinal => MeasurementLevel::Ordinal,
            ScaleOverride::TreatAsInterval => MeasurementLevel::IntervalRatio,
        }
    }
}

/// The engine's sole input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StudyDesignQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_goal: Option<AnalysisGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_level: Option<MeasurementLevel>,
    /// Signed so that zero and negative counts reach validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_relationship: Option<SampleRelationship>,
    /// Absent reads as `UNKNOWN`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_status: Option<DistributionStatus>,
    pub dichotomous_predictor_and_outcome: bool,
    pub ambiguous_scale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_override: Option<ScaleOverride>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictor_count: Option<i64>,
    pub has_control_group: bool,
}

impl StudyDesignQuery {
    /// Start a query for a difference between groups
    pub fn difference() -> Self {
        Self {
            analysis_goal: Some(AnalysisGoal::Difference),
            ..Self::default()
        }
    }

    /// Start a query for an association between variables
    pub fn association() -> Self {
        Self {
            analysis_goal: Some(AnalysisGoal::Association),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: MeasurementLevel) -> Self {
        self.measurement_level = Some(level);
        self
    }

    pub fn with_groups(mut self, count: i64) -> Self {
        self.group_count = Some(count);
        self
    }

    pub fn with_relationship(mut self, relationship: SampleRelationship) -> Self {
        self.sample_relationship = Some(relationship);
        self
    }

    pub fn independent(self) -> Self {
        self.with_relationship(SampleRelationship::Independent)
    }

    pub fn paired(self) -> Self {
        self.with_relationship(SampleRelationship::Paired)
    }

    pub fn with_distribution(mut self, status: DistributionStatus) -> Self {
        self.distribution_status = Some(status);
        self
    }

    pub fn with_dichotomous_predictor_and_outcome(mut self) -> Self {
        self.dichotomous_predictor_and_outcome = true;
        self
    }

    /// Mark the dependent variable as a summed scale of ambiguous level
    pub fn with_ambiguous_scale(mut self, decision: Option<ScaleOverride>) -> Self {
        self.ambiguous_scale = true;
        self.scale_override = decision;
        self
    }

    pub fn with_variables(mut self, count: i64) -> Self {
        self.variable_count = Some(count);
        self
    }

    pub fn with_predictors(mut self, count: i64) -> Self {
        self.predictor_count = Some(count);
        self
    }

    pub fn with_control_group(mut self) -> Self {
        self.has_control_group = true;
        self
    }
}
