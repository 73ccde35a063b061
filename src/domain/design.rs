//! Typed study designs
//!
//! `StudyDesign` is what a `StudyDesignQuery` becomes once every attribute
//! has been checked: missing attributes, out-of-range counts and jointly
//! incoherent combinations are all rejected here, so the decision procedure
//! only ever branches over designs that make sense.

use crate::domain::errors::{QueryField, RecommendationError};
use crate::domain::query::{
    AnalysisGoal, DistributionStatus, MeasurementLevel, SampleRelationship, ScaleOverride,
    StudyDesignQuery,
};
use crate::domain::types::{GroupCount, PredictorCount, VariableCount};
use crate::domain::validation_constants;

/// Where the effective measurement level came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSource {
    /// Stated directly by the caller
    Declared,
    /// A summed scale the caller explicitly chose to treat one way
    Override(ScaleOverride),
    /// A summed scale with no caller decision; read as ordinal and flagged
    AmbiguousDefault,
}

/// Effective measurement level of the dependent variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub level: MeasurementLevel,
    pub source: LevelSource,
}

impl Measurement {
    pub fn declared(level: MeasurementLevel) -> Self {
        Self {
            level,
            source: LevelSource::Declared,
        }
    }

    pub fn is_ambiguous_default(&self) -> bool {
        self.source == LevelSource::AmbiguousDefault
    }
}

/// How the groups of a difference design relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLayout {
    /// Repeated or matched measurements on the same subjects
    Paired {
        groups: GroupCount,
        /// The caller gave one group and no relationship; a single-group
        /// difference can only be a before/after comparison
        inferred: bool,
    },
    /// Separate groups of subjects
    Independent { groups: GroupCount },
}

impl GroupLayout {
    pub fn groups(&self) -> GroupCount {
        match self {
            GroupLayout::Paired { groups, .. } | GroupLayout::Independent { groups } => *groups,
        }
    }

    pub fn relationship(&self) -> SampleRelationship {
        match self {
            GroupLayout::Paired { .. } => SampleRelationship::Paired,
            GroupLayout::Independent { .. } => SampleRelationship::Independent,
        }
    }
}

/// What a difference design compares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// One nominal sample against expected proportions
    OneSample,
    Groups(GroupLayout),
}

impl Comparison {
    pub fn groups(&self) -> GroupCount {
        match self {
            Comparison::OneSample => GroupCount::single(),
            Comparison::Groups(layout) => layout.groups(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifferenceDesign {
    pub measurement: Measurement,
    pub comparison: Comparison,
    pub distribution: DistributionStatus,
    pub dichotomous_predictor_and_outcome: bool,
    pub has_control_group: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationDesign {
    pub measurement: Measurement,
    pub distribution: DistributionStatus,
    pub dichotomous_predictor_and_outcome: bool,
    pub variables: VariableCount,
    pub predictors: Option<PredictorCount>,
}

impl AssociationDesign {
    /// Association designs are always one sample measured on several variables
    pub fn groups(&self) -> GroupCount {
        GroupCount::single()
    }
}

/// A validated design, ready for test selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyDesign {
    Difference(DifferenceDesign),
    Association(AssociationDesign),
}

impl StudyDesign {
    /// Validate a raw query into a typed design
    pub fn try_from_query(query: &StudyDesignQuery) -> Result<Self, RecommendationError> {
        let goal = query
            .analysis_goal
            .ok_or(RecommendationError::missing(QueryField::AnalysisGoal))?;
        let groups = query.group_count.map(parse_group_count).transpose()?;
        let measurement = resolve_measurement(query)?;
        let distribution = query.distribution_status.unwrap_or_default();

        match goal {
            AnalysisGoal::Difference => {
                difference_design(query, groups, measurement, distribution).map(Self::Difference)
            }
            AnalysisGoal::Association => {
                association_design(query, measurement, distribution).map(Self::Association)
            }
        }
    }

    pub fn measurement(&self) -> Measurement {
        match self {
            StudyDesign::Difference(design) => design.measurement,
            StudyDesign::Association(design) => design.measurement,
        }
    }

    pub fn goal(&self) -> AnalysisGoal {
        match self {
            StudyDesign::Difference(_) => AnalysisGoal::Difference,
            StudyDesign::Association(_) => AnalysisGoal::Association,
        }
    }
}

impl TryFrom<&StudyDesignQuery> for StudyDesign {
    type Error = RecommendationError;

    fn try_from(query: &StudyDesignQuery) -> Result<Self, Self::Error> {
        Self::try_from_query(query)
    }
}

fn parse_group_count(raw: i64) -> Result<GroupCount, RecommendationError> {
    GroupCount::from_wire(raw).ok_or(RecommendationError::invalid(
        QueryField::GroupCount,
        "must be a positive integer",
    ))
}

fn resolve_measurement(query: &StudyDesignQuery) -> Result<Measurement, RecommendationError> {
    if query.ambiguous_scale {
        if query.measurement_level == Some(MeasurementLevel::Nominal) {
            return Err(RecommendationError::incoherent(
                &[QueryField::MeasurementLevel, QueryField::AmbiguousScale],
                "a nominal variable cannot be a summed rating scale",
            ));
        }
        return Ok(match query.scale_override {
            Some(decision) => Measurement {
                level: decision.level(),
                source: LevelSource::Override(decision),
            },
            None => Measurement {
                level: MeasurementLevel::Ordinal,
                source: LevelSource::AmbiguousDefault,
            },
        });
    }

    if query.scale_override.is_some() {
        return Err(RecommendationError::incoherent(
            &[QueryField::ScaleOverride, QueryField::AmbiguousScale],
            "a scale override only applies to a scale flagged as ambiguous",
        ));
    }

    query
        .measurement_level
        .map(Measurement::declared)
        .ok_or(RecommendationError::missing(QueryField::MeasurementLevel))
}

fn difference_design(
    query: &StudyDesignQuery,
    groups: Option<GroupCount>,
    measurement: Measurement,
    distribution: DistributionStatus,
) -> Result<DifferenceDesign, RecommendationError> {
    let groups = groups.ok_or(RecommendationError::missing(QueryField::GroupCount))?;

    let comparison = match (groups.is_single(), query.sample_relationship) {
        (true, Some(SampleRelationship::Independent)) => {
            return Err(RecommendationError::incoherent(
                &[
                    QueryField::AnalysisGoal,
                    QueryField::GroupCount,
                    QueryField::SampleRelationship,
                ],
                "a single independent group has nothing to be compared against",
            ));
        }
        (true, _) if measurement.level == MeasurementLevel::Nominal => Comparison::OneSample,
        (true, Some(SampleRelationship::Paired)) => Comparison::Groups(GroupLayout::Paired {
            groups,
            inferred: false,
        }),
        (true, None) => Comparison::Groups(GroupLayout::Paired {
            groups,
            inferred: true,
        }),
        (false, None) => {
            return Err(RecommendationError::missing(QueryField::SampleRelationship));
        }
        (false, Some(SampleRelationship::Independent)) => {
            Comparison::Groups(GroupLayout::Independent { groups })
        }
        (false, Some(SampleRelationship::Paired)) => Comparison::Groups(GroupLayout::Paired {
            groups,
            inferred: false,
        }),
    };

    if query.dichotomous_predictor_and_outcome && comparison == Comparison::OneSample {
        return Err(RecommendationError::incoherent(
            &[
                QueryField::DichotomousPredictorAndOutcome,
                QueryField::GroupCount,
            ],
            "a one-sample design has no predictor to pair with the outcome",
        ));
    }
    if query.dichotomous_predictor_and_outcome && measurement.level != MeasurementLevel::Nominal {
        return Err(RecommendationError::incoherent(
            &[
                QueryField::DichotomousPredictorAndOutcome,
                QueryField::MeasurementLevel,
            ],
            "a dichotomous outcome is measured at the nominal level",
        ));
    }
    if query.variable_count.is_some() {
        return Err(RecommendationError::incoherent(
            &[QueryField::AnalysisGoal, QueryField::VariableCount],
            "a variable count only applies to association designs",
        ));
    }
    if query.predictor_count.is_some() {
        return Err(RecommendationError::incoherent(
            &[QueryField::AnalysisGoal, QueryField::PredictorCount],
            "a predictor count only applies to association designs",
        ));
    }

    Ok(DifferenceDesign {
        measurement,
        comparison,
        distribution,
        dichotomous_predictor_and_outcome: query.dichotomous_predictor_and_outcome,
        has_control_group: query.has_control_group,
    })
}

fn association_design(
    query: &StudyDesignQuery,
    measurement: Measurement,
    distribution: DistributionStatus,
) -> Result<AssociationDesign, RecommendationError> {
    if query.has_control_group {
        return Err(RecommendationError::incoherent(
            &[QueryField::AnalysisGoal, QueryField::HasControlGroup],
            "an association design measures one sample and has no control group",
        ));
    }

    let variables = query
        .variable_count
        .map(|raw| {
            VariableCount::from_wire(raw).ok_or(RecommendationError::invalid(
                QueryField::VariableCount,
                "an association needs at least two variables",
            ))
        })
        .transpose()?;
    let predictors = query
        .predictor_count
        .map(|raw| {
            PredictorCount::from_wire(raw).ok_or(RecommendationError::invalid(
                QueryField::PredictorCount,
                "must be a positive integer",
            ))
        })
        .transpose()?;

    let variables = match (variables, predictors) {
        (Some(variables), Some(predictors))
            if variables.into_inner() != predictors.implied_variables() =>
        {
            return Err(RecommendationError::incoherent(
                &[QueryField::VariableCount, QueryField::PredictorCount],
                "the variable count must equal the predictor count plus one outcome",
            ));
        }
        (Some(variables), None) if !variables.is_bivariate() => {
            return Err(RecommendationError::unsupported(
                &[QueryField::VariableCount],
                "more than two correlated variables need a predictor count to be framed as a regression model",
            ));
        }
        (Some(variables), _) => variables,
        (None, Some(predictors)) => VariableCount::try_new(predictors.implied_variables())
            .map_err(|_| {
                RecommendationError::invalid(QueryField::PredictorCount, "too many predictors")
            })?,
        (None, None) => VariableCount::from_wire(validation_constants::variables::DEFAULT_COUNT)
            .ok_or(RecommendationError::invalid(
                QueryField::VariableCount,
                "an association needs at least two variables",
            ))?,
    };

    let rank_based = measurement.level != MeasurementLevel::IntervalRatio
        || distribution == DistributionStatus::NonNormal;
    if let Some(predictors) = predictors {
        if predictors.is_multiple() && rank_based && !query.dichotomous_predictor_and_outcome {
            let field = if measurement.level == MeasurementLevel::IntervalRatio {
                QueryField::DistributionStatus
            } else {
                QueryField::MeasurementLevel
            };
            return Err(RecommendationError::unsupported(
                &[QueryField::PredictorCount, field],
                "several predictors of a rank-based or categorical outcome need a model beyond this engine",
            ));
        }
    }

    Ok(AssociationDesign {
        measurement,
        distribution,
        dichotomous_predictor_and_outcome: query.dichotomous_predictor_and_outcome,
        variables,
        predictors,
    })
}
