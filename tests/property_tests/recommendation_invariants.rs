//! Property-based tests for recommendation invariants
//!
//! These tests run the engine over arbitrary queries, valid or not, and check
//! the properties every answer must have regardless of the path taken.

use proptest::prelude::*;
use stats_advisor::domain::{
    AnalysisGoal, DistributionStatus, MeasurementLevel, SampleRelationship, ScaleOverride,
    StatisticalProcedure,
};
use stats_advisor::{recommend, StudyDesignQuery};

// Property test generators
pub mod generators {
    use super::*;

    pub fn analysis_goal() -> impl Strategy<Value = AnalysisGoal> {
        prop_oneof![Just(AnalysisGoal::Difference), Just(AnalysisGoal::Association)]
    }

    pub fn measurement_level() -> impl Strategy<Value = MeasurementLevel> {
        prop_oneof![
            Just(MeasurementLevel::Nominal),
            Just(MeasurementLevel::Ordinal),
            Just(MeasurementLevel::IntervalRatio),
        ]
    }

    pub fn sample_relationship() -> impl Strategy<Value = SampleRelationship> {
        prop_oneof![
            Just(SampleRelationship::Independent),
            Just(SampleRelationship::Paired)
        ]
    }

    pub fn distribution_status() -> impl Strategy<Value = DistributionStatus> {
        prop_oneof![
            Just(DistributionStatus::Normal),
            Just(DistributionStatus::NonNormal),
            Just(DistributionStatus::Unknown),
        ]
    }

    pub fn scale_override() -> impl Strategy<Value = ScaleOverride> {
        prop_oneof![
            Just(ScaleOverride::TreatAsOrdinal),
            Just(ScaleOverride::TreatAsInterval)
        ]
    }

    /// Any query the wire format can express, including invalid ones
    pub fn any_query() -> impl Strategy<Value = StudyDesignQuery> {
        (
            (
                proptest::option::weighted(0.95, analysis_goal()),
                proptest::option::weighted(0.9, measurement_level()),
                proptest::option::weighted(0.9, -1i64..6),
                proptest::option::weighted(0.8, sample_relationship()),
                proptest::option::of(distribution_status()),
            ),
            (
                any::<bool>(),
                proptest::bool::weighted(0.1),
                proptest::option::weighted(0.1, scale_override()),
                proptest::option::weighted(0.15, 0i64..5),
                proptest::option::weighted(0.15, 0i64..4),
                proptest::bool::weighted(0.2),
            ),
        )
            .prop_map(
                |(
                    (goal, level, groups, relationship, distribution),
                    (dichotomous, ambiguous, decision, variables, predictors, control),
                )| StudyDesignQuery {
                    analysis_goal: goal,
                    measurement_level: level,
                    group_count: groups,
                    sample_relationship: relationship,
                    distribution_status: distribution,
                    dichotomous_predictor_and_outcome: dichotomous,
                    ambiguous_scale: ambiguous,
                    scale_override: decision,
                    variable_count: variables,
                    predictor_count: predictors,
                    has_control_group: control,
                },
            )
    }

    /// A fully specified, valid difference query with the given level
    pub fn difference_query(
        level: MeasurementLevel,
    ) -> impl Strategy<Value = StudyDesignQuery> {
        (1i64..8, sample_relationship(), distribution_status()).prop_map(
            move |(groups, relationship, distribution)| {
                // One group can only be compared against itself
                let relationship = if groups == 1 {
                    SampleRelationship::Paired
                } else {
                    relationship
                };
                StudyDesignQuery::difference()
                    .with_level(level)
                    .with_groups(groups)
                    .with_relationship(relationship)
                    .with_distribution(distribution)
            },
        )
    }
}

const NON_NOMINAL_NAME_FRAGMENTS: [&str; 4] = ["t-test", "ANOVA", "Pearson", "Spearman"];

proptest! {
    #[test]
    fn prop_nominal_queries_never_name_parametric_or_rank_tests(
        mut query in generators::any_query()
    ) {
        query.measurement_level = Some(MeasurementLevel::Nominal);
        if let Ok(recommendation) = recommend(&query) {
            for name in recommendation.names() {
                for fragment in NON_NOMINAL_NAME_FRAGMENTS {
                    prop_assert!(!name.contains(fragment), "{name} returned for a nominal query");
                }
            }
        }
    }

    #[test]
    fn prop_nominal_association_includes_chi_square_never_pearson(
        mut query in generators::any_query()
    ) {
        query.analysis_goal = Some(AnalysisGoal::Association);
        query.measurement_level = Some(MeasurementLevel::Nominal);
        if let Ok(recommendation) = recommend(&query) {
            prop_assert!(recommendation.contains(StatisticalProcedure::ChiSquareIndependence));
            prop_assert!(!recommendation.contains(StatisticalProcedure::PearsonCorrelation));
        }
    }

    #[test]
    fn prop_three_or_more_groups_get_an_omnibus_primary(
        mut query in generators::any_query(),
        groups in 3i64..12
    ) {
        query.analysis_goal = Some(AnalysisGoal::Difference);
        query.group_count = Some(groups);
        if let Ok(recommendation) = recommend(&query) {
            let primary = recommendation.primary().procedure;
            prop_assert!(primary.is_omnibus(), "{primary} is not an omnibus test");
            prop_assert!(!primary.is_pairwise());
            prop_assert!(!recommendation.caveats().is_empty(), "missing post hoc guidance");
        }
    }

    #[test]
    fn prop_recommend_is_idempotent(query in generators::any_query()) {
        let first = serde_json::to_string(&recommend(&query)).unwrap();
        let second = serde_json::to_string(&recommend(&query)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_non_normal_interval_mirrors_the_ordinal_branch(
        query in generators::difference_query(MeasurementLevel::IntervalRatio)
    ) {
        let non_normal = query.clone().with_distribution(DistributionStatus::NonNormal);
        let ordinal = query.with_level(MeasurementLevel::Ordinal);

        let non_normal = recommend(&non_normal).map(|r| r.names());
        let ordinal = recommend(&ordinal).map(|r| r.names());
        prop_assert_eq!(non_normal, ordinal);
    }

    #[test]
    fn prop_normal_interval_primary_is_parametric(
        query in generators::difference_query(MeasurementLevel::IntervalRatio)
    ) {
        let query = query.with_distribution(DistributionStatus::Normal);
        let recommendation = recommend(&query).unwrap();
        prop_assert!(recommendation.primary().procedure.is_parametric());
        prop_assert!(recommendation.ambiguity_warning().is_none());
    }

    #[test]
    fn prop_every_recommendation_has_exactly_one_primary_listed_first(
        query in generators::any_query()
    ) {
        if let Ok(recommendation) = recommend(&query) {
            let primaries: Vec<_> = recommendation
                .procedures()
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_primary)
                .map(|(index, _)| index)
                .collect();
            prop_assert_eq!(primaries, vec![0]);
            prop_assert!(recommendation
                .procedures()
                .iter()
                .all(|p| !p.rationale.is_empty()));
        }
    }

    #[test]
    fn prop_unknown_distribution_is_always_flagged(
        query in generators::difference_query(MeasurementLevel::IntervalRatio)
    ) {
        let query = query.with_distribution(DistributionStatus::Unknown);
        let recommendation = recommend(&query).unwrap();
        prop_assert!(recommendation.is_ambiguous());
        prop_assert!(recommendation.procedures().len() >= 2);
        prop_assert!(recommendation.primary().procedure.is_parametric());
        prop_assert!(recommendation.alternates().any(|p| !p.procedure.is_parametric()));
    }

    #[test]
    fn prop_single_independent_difference_group_is_refused(
        level in generators::measurement_level(),
        distribution in generators::distribution_status()
    ) {
        let query = StudyDesignQuery::difference()
            .with_level(level)
            .with_groups(1)
            .independent()
            .with_distribution(distribution);
        prop_assert!(recommend(&query).is_err());
    }
}
