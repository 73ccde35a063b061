//! Statistical-test selection
//!
//! `recommend` is a sequential discriminator over a small, fixed set of
//! design attributes. The difference branch settles the measurement level
//! first, then the group layout, then (for interval/ratio data only) the
//! distribution. The association branch settles the level and distribution
//! and then whether the association is framed as prediction.
//!
//! The function is pure: identical queries always produce identical
//! recommendations, and it holds no state between calls.

use tracing::{debug, instrument};

use crate::domain::design::{
    AssociationDesign, Comparison, DifferenceDesign, GroupLayout, LevelSource, Measurement,
    StudyDesign,
};
use crate::domain::errors::RecommendationError;
use crate::domain::guidance::{ambiguity, contingency, post_hoc};
use crate::domain::procedure::StatisticalProcedure;
use crate::domain::query::{DistributionStatus, MeasurementLevel, StudyDesignQuery};
use crate::domain::recommendation::{Recommendation, RecommendationBuilder};
use crate::domain::types::{Caveat, Rationale};

/// Select the inferential procedure(s) for a study design
#[instrument(level = "debug", skip_all, fields(goal = ?query.analysis_goal, level = ?query.measurement_level))]
pub fn recommend(query: &StudyDesignQuery) -> Result<Recommendation, RecommendationError> {
    let design = StudyDesign::try_from_query(query).inspect_err(|error| {
        debug!(kind = error.kind(), %error, "study design rejected");
    })?;

    Ok(recommend_design(&design))
}

/// Select procedures for a design that has already been validated
pub fn recommend_design(design: &StudyDesign) -> Recommendation {
    let builder = match design {
        StudyDesign::Difference(difference) => recommend_difference(difference),
        StudyDesign::Association(association) => recommend_association(association),
    };

    let builder = if design.measurement().is_ambiguous_default() {
        builder.ambiguity(ambiguity::SCALE_READ_AS_ORDINAL)
    } else {
        builder
    };

    debug!(
        primary = %builder.primary_procedure(),
        "statistical procedure selected"
    );
    builder.build()
}

fn recommend_difference(design: &DifferenceDesign) -> RecommendationBuilder {
    let context = difference_context(design);

    let layout = match design.comparison {
        Comparison::OneSample => {
            return RecommendationBuilder::primary(
                StatisticalProcedure::ChiSquareGoodnessOfFit,
                because(format!(
                    "{context}; category frequencies of one sample are compared with expected proportions"
                )),
            );
        }
        Comparison::Groups(layout) => layout,
    };

    match design.measurement.level {
        MeasurementLevel::Nominal => {
            let builder = nominal_difference(layout, &context);
            if design.dichotomous_predictor_and_outcome {
                with_dichotomous_alternates(builder, &context)
            } else {
                builder
            }
        }
        MeasurementLevel::Ordinal => rank_difference(
            layout,
            &context,
            "an ordinal outcome calls for a rank-based test",
        ),
        MeasurementLevel::IntervalRatio => match design.distribution {
            DistributionStatus::Normal => {
                parametric_difference(layout, &context, design.has_control_group)
            }
            DistributionStatus::NonNormal => rank_difference(
                layout,
                &context,
                "interval/ratio data that are not normally distributed fall back to the rank-based equivalent",
            ),
            DistributionStatus::Unknown => {
                let parametric = parametric_difference(
                    layout,
                    &format!("{context}; if the data prove NORMAL"),
                    design.has_control_group,
                );
                let rank = rank_difference(
                    layout,
                    &format!("{context}; if the data prove NON_NORMAL"),
                    "the rank-based equivalent applies when normality fails",
                );
                parametric
                    .with_alternative(rank)
                    .ambiguity(ambiguity::DISTRIBUTION_UNKNOWN)
            }
        },
    }
}

fn nominal_difference(layout: GroupLayout, context: &str) -> RecommendationBuilder {
    match layout {
        GroupLayout::Paired { groups, .. } if !groups.needs_omnibus() => {
            RecommendationBuilder::primary(
                StatisticalProcedure::McNemar,
                because(format!(
                    "{context}; the same subjects are classified twice on a nominal outcome"
                )),
            )
        }
        GroupLayout::Independent { groups } if !groups.needs_omnibus() => {
            RecommendationBuilder::primary(
                StatisticalProcedure::ChiSquareIndependence,
                because(format!(
                    "{context}; frequencies of a nominal outcome are compared across two independent groups"
                )),
            )
            .alternate(
                StatisticalProcedure::FisherExact,
                because(format!(
                    "{context}; exact alternative for a 2x2 table when any expected cell count is small"
                )),
            )
            .caveat(guidance(contingency::SMALL_EXPECTED_COUNTS))
        }
        GroupLayout::Paired { .. } => RecommendationBuilder::primary(
            StatisticalProcedure::ChiSquareIndependence,
            because(format!(
                "{context}; omnibus comparison of a nominal outcome across three or more related measurements"
            )),
        )
        .caveat(guidance(contingency::PAIRED_OMNIBUS))
        .caveat(guidance(post_hoc::CHI_SQUARE)),
        GroupLayout::Independent { .. } => RecommendationBuilder::primary(
            StatisticalProcedure::ChiSquareIndependence,
            because(format!(
                "{context}; omnibus comparison of a nominal outcome across three or more independent groups"
            )),
        )
        .caveat(guidance(post_hoc::CHI_SQUARE)),
    }
}

fn rank_difference(layout: GroupLayout, context: &str, reason: &str) -> RecommendationBuilder {
    match layout {
        GroupLayout::Paired { groups, .. } if !groups.needs_omnibus() => {
            RecommendationBuilder::primary(
                StatisticalProcedure::WilcoxonSignedRank,
                because(format!(
                    "{context}; {reason}: two related measurements are compared by signed ranks"
                )),
            )
        }
        GroupLayout::Independent { groups } if !groups.needs_omnibus() => {
            RecommendationBuilder::primary(
                StatisticalProcedure::MannWhitneyU,
                because(format!(
                    "{context}; {reason}: two independent groups are compared by ranks (Wilcoxon rank-sum)"
                )),
            )
        }
        GroupLayout::Paired { .. } => RecommendationBuilder::primary(
            StatisticalProcedure::Friedman,
            because(format!(
                "{context}; {reason}: omnibus rank comparison of three or more related measurements"
            )),
        )
        .caveat(guidance(post_hoc::FRIEDMAN)),
        GroupLayout::Independent { .. } => RecommendationBuilder::primary(
            StatisticalProcedure::KruskalWallis,
            because(format!(
                "{context}; {reason}: omnibus rank comparison of three or more independent groups"
            )),
        )
        .caveat(guidance(post_hoc::KRUSKAL_WALLIS)),
    }
}

fn parametric_difference(
    layout: GroupLayout,
    context: &str,
    has_control_group: bool,
) -> RecommendationBuilder {
    let (procedure, reason, caveat) = match layout {
        GroupLayout::Paired { groups, .. } if !groups.needs_omnibus() => (
            StatisticalProcedure::PairedSamplesT,
            "means of two related measurements are compared",
            None,
        ),
        GroupLayout::Independent { groups } if !groups.needs_omnibus() => (
            StatisticalProcedure::IndependentSamplesT,
            "means of two independent groups are compared",
            None,
        ),
        GroupLayout::Paired { .. } => (
            StatisticalProcedure::RepeatedMeasuresAnova,
            "omnibus comparison of means across three or more related measurements",
            Some(post_hoc::REPEATED_MEASURES_ANOVA),
        ),
        GroupLayout::Independent { .. } => (
            StatisticalProcedure::OneWayAnova,
            "omnibus comparison of means across three or more independent groups",
            Some(if has_control_group {
                post_hoc::ONE_WAY_ANOVA_WITH_CONTROL
            } else {
                post_hoc::ONE_WAY_ANOVA
            }),
        ),
    };

    let rationale = match procedure.nonparametric_counterpart() {
        Some(fallback) => format!(
            "{context}; {reason} with a parametric test on normally distributed interval/ratio data ({fallback} if normality fails)"
        ),
        None => format!("{context}; {reason}"),
    };
    let builder = RecommendationBuilder::primary(procedure, because(rationale));
    match caveat {
        Some(caveat) => builder.caveat(guidance(caveat)),
        None => builder,
    }
}

fn recommend_association(design: &AssociationDesign) -> RecommendationBuilder {
    let context = association_context(design);
    let multiple_predictors = design.predictors.is_some_and(|p| p.is_multiple());
    let level = design.measurement.level;

    let builder = match (level, design.distribution) {
        (MeasurementLevel::Nominal, _)
        | (MeasurementLevel::Ordinal, _)
        | (MeasurementLevel::IntervalRatio, DistributionStatus::NonNormal)
            if multiple_predictors =>
        {
            // Only reachable with a dichotomous outcome; design validation
            // refuses every other multi-predictor rank/categorical model.
            let bivariate = bivariate_rank_or_contingency(level, &context);
            RecommendationBuilder::primary(
                StatisticalProcedure::LogisticRegression,
                because(format!(
                    "{context}; several predictors of a dichotomous outcome are modelled jointly"
                )),
            )
            .with_alternative(bivariate)
        }
        (MeasurementLevel::Nominal, _)
        | (MeasurementLevel::Ordinal, _)
        | (MeasurementLevel::IntervalRatio, DistributionStatus::NonNormal) => {
            bivariate_rank_or_contingency(level, &context)
        }
        (MeasurementLevel::IntervalRatio, DistributionStatus::Normal) => {
            parametric_association(design, &context)
        }
        (MeasurementLevel::IntervalRatio, DistributionStatus::Unknown) => {
            let parametric =
                parametric_association(design, &format!("{context}; if the data prove NORMAL"));
            if multiple_predictors {
                parametric.ambiguity(ambiguity::NO_RANK_BASED_MODEL)
            } else {
                let rank = rank_association(
                    &format!("{context}; if the data prove NON_NORMAL"),
                    "the rank-based equivalent applies when normality fails",
                );
                parametric
                    .with_alternative(rank)
                    .ambiguity(ambiguity::DISTRIBUTION_UNKNOWN)
            }
        }
    };

    if design.dichotomous_predictor_and_outcome {
        with_dichotomous_alternates(builder, &context)
    } else {
        builder
    }
}

fn bivariate_rank_or_contingency(level: MeasurementLevel, context: &str) -> RecommendationBuilder {
    match level {
        MeasurementLevel::Nominal => nominal_association(context),
        MeasurementLevel::Ordinal => rank_association(
            context,
            "ordinal variables are correlated by rank",
        ),
        MeasurementLevel::IntervalRatio => rank_association(
            context,
            "interval/ratio data that are not normally distributed are correlated by rank",
        ),
    }
}

fn nominal_association(context: &str) -> RecommendationBuilder {
    RecommendationBuilder::primary(
        StatisticalProcedure::ChiSquareIndependence,
        because(format!(
            "{context}; association between nominal variables is tested on a contingency table"
        )),
    )
    .alternate(
        StatisticalProcedure::PhiCoefficient,
        because(format!("{context}; effect size for a 2x2 table")),
    )
    .alternate(
        StatisticalProcedure::CramersV,
        because(format!("{context}; effect size for a table larger than 2x2")),
    )
    .caveat(guidance(contingency::SMALL_EXPECTED_COUNTS))
    .caveat(guidance(contingency::EFFECT_SIZE))
}

fn rank_association(context: &str, reason: &str) -> RecommendationBuilder {
    RecommendationBuilder::primary(
        StatisticalProcedure::SpearmanCorrelation,
        because(format!("{context}; {reason}")),
    )
}

fn parametric_association(design: &AssociationDesign, context: &str) -> RecommendationBuilder {
    match design.predictors {
        Some(predictors) if predictors.is_multiple() => RecommendationBuilder::primary(
            StatisticalProcedure::MultipleLinearRegression,
            because(format!(
                "{context}; {predictors} predictors of a normally distributed interval/ratio outcome escalate to multiple regression"
            )),
        ),
        Some(_) => RecommendationBuilder::primary(
            StatisticalProcedure::SimpleLinearRegression,
            because(format!(
                "{context}; one predictor of a normally distributed interval/ratio outcome escalates to simple regression"
            )),
        )
        .alternate(
            StatisticalProcedure::PearsonCorrelation,
            because(format!("{context}; strength of the underlying bivariate linear association")),
        ),
        None => RecommendationBuilder::primary(
            StatisticalProcedure::PearsonCorrelation,
            because(format!(
                "{context}; linear association between two normally distributed interval/ratio variables"
            )),
        ),
    }
}

fn with_dichotomous_alternates(
    builder: RecommendationBuilder,
    context: &str,
) -> RecommendationBuilder {
    builder
        .alternate(
            StatisticalProcedure::OddsRatio,
            because(format!("{context}; predictor and outcome are both dichotomous")),
        )
        .alternate(
            StatisticalProcedure::LogisticRegression,
            because(format!("{context}; models the odds of the dichotomous outcome")),
        )
}

fn level_phrase(measurement: Measurement) -> String {
    match measurement.source {
        LevelSource::Declared => measurement.level.to_string(),
        LevelSource::Override(decision) => {
            format!("{} (summed scale, caller override {decision})", measurement.level)
        }
        LevelSource::AmbiguousDefault => format!(
            "{} (summed scale of ambiguous level, read as ORDINAL absent an override)",
            measurement.level
        ),
    }
}

fn difference_context(design: &DifferenceDesign) -> String {
    let comparison = match design.comparison {
        Comparison::OneSample => "one sample".to_string(),
        Comparison::Groups(GroupLayout::Paired {
            inferred: true, ..
        }) => "one group assessed twice (PAIRED inferred for a single-group difference)".to_string(),
        Comparison::Groups(GroupLayout::Paired { groups, .. }) if groups.is_single() => {
            "one group assessed twice (PAIRED)".to_string()
        }
        Comparison::Groups(layout) => {
            format!("{} {} groups", layout.groups(), layout.relationship())
        }
    };

    let mut context = format!(
        "DIFFERENCE goal, {} measurement, {comparison}",
        level_phrase(design.measurement)
    );
    if design.measurement.level == MeasurementLevel::IntervalRatio {
        context.push_str(&format!(", distribution {}", design.distribution));
    }
    context
}

fn association_context(design: &AssociationDesign) -> String {
    let mut context = format!(
        "ASSOCIATION goal, {} measurement, one sample",
        level_phrase(design.measurement)
    );
    if design.measurement.level == MeasurementLevel::IntervalRatio {
        context.push_str(&format!(", distribution {}", design.distribution));
    }
    if let Some(predictors) = design.predictors {
        context.push_str(&format!(", {predictors} predictor(s)"));
    }
    context
}

fn because(text: String) -> Rationale {
    Rationale::try_new(text).expect("engine rationales always open with the design context")
}

fn guidance(text: &'static str) -> Caveat {
    Caveat::try_new(text.to_string()).expect("guidance texts are non-empty and bounded")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::QueryField;
    use crate::domain::query::{SampleRelationship, ScaleOverride};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::domain::procedure::StatisticalProcedure as P;
    use crate::domain::query::MeasurementLevel::{IntervalRatio, Nominal, Ordinal};
    use crate::domain::query::SampleRelationship::{Independent, Paired};

    fn difference(
        level: MeasurementLevel,
        groups: i64,
        relationship: SampleRelationship,
        distribution: DistributionStatus,
    ) -> StudyDesignQuery {
        StudyDesignQuery::difference()
            .with_level(level)
            .with_groups(groups)
            .with_relationship(relationship)
            .with_distribution(distribution)
    }

    fn primary_of(query: &StudyDesignQuery) -> StatisticalProcedure {
        recommend(query).unwrap().primary().procedure
    }

    fn caveat_texts(recommendation: &Recommendation) -> Vec<&str> {
        recommendation.caveats().iter().map(Caveat::as_str).collect()
    }

    #[rstest]
    #[case(Nominal, 2, Independent, P::ChiSquareIndependence)]
    #[case(Nominal, 2, Paired, P::McNemar)]
    #[case(Nominal, 1, Paired, P::ChiSquareGoodnessOfFit)]
    #[case(Nominal, 3, Independent, P::ChiSquareIndependence)]
    #[case(Nominal, 4, Paired, P::ChiSquareIndependence)]
    #[case(Ordinal, 1, Paired, P::WilcoxonSignedRank)]
    #[case(Ordinal, 2, Independent, P::MannWhitneyU)]
    #[case(Ordinal, 2, Paired, P::WilcoxonSignedRank)]
    #[case(Ordinal, 3, Independent, P::KruskalWallis)]
    #[case(Ordinal, 5, Paired, P::Friedman)]
    fn test_difference_table_for_nominal_and_ordinal(
        #[case] level: MeasurementLevel,
        #[case] groups: i64,
        #[case] relationship: SampleRelationship,
        #[case] expected: StatisticalProcedure,
    ) {
        let query = difference(level, groups, relationship, DistributionStatus::Unknown);
        assert_eq!(primary_of(&query), expected);
    }

    #[rstest]
    #[case(1, Paired, P::PairedSamplesT, P::WilcoxonSignedRank)]
    #[case(2, Independent, P::IndependentSamplesT, P::MannWhitneyU)]
    #[case(2, Paired, P::PairedSamplesT, P::WilcoxonSignedRank)]
    #[case(3, Independent, P::OneWayAnova, P::KruskalWallis)]
    #[case(3, Paired, P::RepeatedMeasuresAnova, P::Friedman)]
    fn test_interval_difference_by_distribution(
        #[case] groups: i64,
        #[case] relationship: SampleRelationship,
        #[case] parametric: StatisticalProcedure,
        #[case] rank_based: StatisticalProcedure,
    ) {
        let normal = recommend(&difference(
            IntervalRatio,
            groups,
            relationship,
            DistributionStatus::Normal,
        ))
        .unwrap();
        assert_eq!(normal.primary().procedure, parametric);
        assert!(!normal.is_ambiguous());

        let non_normal = recommend(&difference(
            IntervalRatio,
            groups,
            relationship,
            DistributionStatus::NonNormal,
        ))
        .unwrap();
        assert_eq!(non_normal.primary().procedure, rank_based);

        let unknown = recommend(&difference(
            IntervalRatio,
            groups,
            relationship,
            DistributionStatus::Unknown,
        ))
        .unwrap();
        let names: Vec<_> = unknown.procedures().iter().map(|p| p.procedure).collect();
        assert_eq!(names, vec![parametric, rank_based]);
        assert!(unknown.primary().is_primary);
        assert!(!unknown.procedures()[1].is_primary);
        assert_eq!(
            unknown.ambiguity_warning(),
            Some(ambiguity::DISTRIBUTION_UNKNOWN)
        );
    }

    #[test]
    fn test_nominal_one_sample_is_goodness_of_fit() {
        let query = StudyDesignQuery::difference()
            .with_level(Nominal)
            .with_groups(1);
        assert_eq!(primary_of(&query), P::ChiSquareGoodnessOfFit);
    }

    #[test]
    fn test_nominal_single_paired_group_is_goodness_of_fit_not_mcnemar() {
        let recommendation = recommend(
            &StudyDesignQuery::difference()
                .with_level(Nominal)
                .with_groups(1)
                .paired(),
        )
        .unwrap();
        assert_eq!(
            recommendation.names(),
            vec!["one-sample chi-square goodness-of-fit test"]
        );
        assert!(!recommendation.contains(P::McNemar));
    }

    #[test]
    fn test_dichotomous_flag_on_one_sample_design_is_refused() {
        let error = recommend(
            &StudyDesignQuery::difference()
                .with_level(Nominal)
                .with_groups(1)
                .with_dichotomous_predictor_and_outcome(),
        )
        .unwrap_err();
        assert_eq!(
            error,
            RecommendationError::IncoherentCombination {
                fields: vec![
                    QueryField::DichotomousPredictorAndOutcome,
                    QueryField::GroupCount
                ],
                reason: "a one-sample design has no predictor to pair with the outcome",
            }
        );
    }

    #[test]
    fn test_every_rationale_and_caveat_is_non_empty() {
        let queries = [
            difference(Nominal, 2, Independent, DistributionStatus::Unknown),
            difference(Ordinal, 4, Paired, DistributionStatus::Unknown),
            difference(IntervalRatio, 3, Independent, DistributionStatus::Unknown),
            StudyDesignQuery::association()
                .with_level(IntervalRatio)
                .with_predictors(1)
                .with_dichotomous_predictor_and_outcome(),
        ];
        for query in &queries {
            let recommendation = recommend(query).unwrap();
            assert!(recommendation
                .procedures()
                .iter()
                .all(|entry| !entry.rationale.as_str().is_empty()));
            assert!(recommendation.caveats().iter().all(|c| !c.as_str().is_empty()));
        }
    }

    #[test]
    fn test_nominal_two_independent_groups_flags_fisher() {
        let recommendation =
            recommend(&difference(Nominal, 2, Independent, DistributionStatus::Unknown)).unwrap();
        assert_eq!(
            recommendation.names(),
            vec!["chi-square test of independence", "Fisher's exact test"]
        );
        assert!(caveat_texts(&recommendation).contains(&contingency::SMALL_EXPECTED_COUNTS));
        assert!(!recommendation.is_ambiguous());
    }

    #[test]
    fn test_single_group_difference_infers_pairing() {
        let query = StudyDesignQuery::difference()
            .with_level(IntervalRatio)
            .with_groups(1)
            .with_distribution(DistributionStatus::NonNormal);
        let recommendation = recommend(&query).unwrap();
        assert_eq!(recommendation.primary().procedure, P::WilcoxonSignedRank);
        assert!(recommendation.primary().rationale.contains("PAIRED inferred"));
    }

    #[test]
    fn test_anova_post_hoc_guidance_prefers_dunnett_with_control() {
        let without = recommend(&difference(
            IntervalRatio,
            3,
            Independent,
            DistributionStatus::Normal,
        ))
        .unwrap();
        assert_eq!(caveat_texts(&without), vec![post_hoc::ONE_WAY_ANOVA]);

        let with = recommend(
            &difference(IntervalRatio, 3, Independent, DistributionStatus::Normal)
                .with_control_group(),
        )
        .unwrap();
        assert_eq!(
            caveat_texts(&with),
            vec![post_hoc::ONE_WAY_ANOVA_WITH_CONTROL]
        );
    }

    #[test]
    fn test_unknown_distribution_carries_both_post_hoc_caveats() {
        let recommendation = recommend(&difference(
            IntervalRatio,
            4,
            Independent,
            DistributionStatus::Unknown,
        ))
        .unwrap();
        assert_eq!(
            caveat_texts(&recommendation),
            vec![post_hoc::ONE_WAY_ANOVA, post_hoc::KRUSKAL_WALLIS]
        );
    }

    #[test]
    fn test_rationale_names_the_deciding_attributes() {
        let recommendation =
            recommend(&difference(Ordinal, 3, Independent, DistributionStatus::Unknown)).unwrap();
        let rationale = &recommendation.primary().rationale;
        assert!(rationale.contains("DIFFERENCE"));
        assert!(rationale.contains("ORDINAL"));
        assert!(rationale.contains("3 INDEPENDENT groups"));
    }

    #[test]
    fn test_dichotomous_nominal_difference_surfaces_odds_ratio() {
        let query = difference(Nominal, 2, Independent, DistributionStatus::Unknown)
            .with_dichotomous_predictor_and_outcome();
        let recommendation = recommend(&query).unwrap();
        assert_eq!(recommendation.primary().procedure, P::ChiSquareIndependence);
        assert!(recommendation.contains(P::OddsRatio));
        assert!(recommendation.contains(P::LogisticRegression));
    }

    #[test]
    fn test_nominal_association_reports_effect_sizes() {
        let query = StudyDesignQuery::association().with_level(Nominal);
        let recommendation = recommend(&query).unwrap();
        assert_eq!(
            recommendation.names(),
            vec![
                "chi-square test of independence",
                "phi coefficient",
                "Cramér's V"
            ]
        );
        assert!(!recommendation.contains(P::PearsonCorrelation));
    }

    #[rstest]
    #[case(Ordinal, DistributionStatus::Unknown, P::SpearmanCorrelation)]
    #[case(Ordinal, DistributionStatus::Normal, P::SpearmanCorrelation)]
    #[case(IntervalRatio, DistributionStatus::NonNormal, P::SpearmanCorrelation)]
    #[case(IntervalRatio, DistributionStatus::Normal, P::PearsonCorrelation)]
    #[case(IntervalRatio, DistributionStatus::Unknown, P::PearsonCorrelation)]
    fn test_association_table(
        #[case] level: MeasurementLevel,
        #[case] distribution: DistributionStatus,
        #[case] expected: StatisticalProcedure,
    ) {
        let query = StudyDesignQuery::association()
            .with_level(level)
            .with_distribution(distribution);
        assert_eq!(primary_of(&query), expected);
    }

    #[test]
    fn test_unknown_association_lists_spearman_second() {
        let query = StudyDesignQuery::association().with_level(IntervalRatio);
        let recommendation = recommend(&query).unwrap();
        assert_eq!(
            recommendation.names(),
            vec![
                "Pearson product-moment correlation",
                "Spearman rank-order correlation"
            ]
        );
        assert!(recommendation.is_ambiguous());
    }

    #[test]
    fn test_predictor_count_escalates_to_regression() {
        let single = StudyDesignQuery::association()
            .with_level(IntervalRatio)
            .with_distribution(DistributionStatus::Normal)
            .with_predictors(1);
        let recommendation = recommend(&single).unwrap();
        assert_eq!(recommendation.primary().procedure, P::SimpleLinearRegression);
        assert!(recommendation.contains(P::PearsonCorrelation));

        let multiple = StudyDesignQuery::association()
            .with_level(IntervalRatio)
            .with_distribution(DistributionStatus::Normal)
            .with_predictors(3);
        assert_eq!(primary_of(&multiple), P::MultipleLinearRegression);
    }

    #[test]
    fn test_multiple_predictors_with_unknown_distribution_has_no_rank_alternate() {
        let query = StudyDesignQuery::association()
            .with_level(IntervalRatio)
            .with_predictors(2);
        let recommendation = recommend(&query).unwrap();
        assert_eq!(recommendation.names(), vec!["multiple linear regression"]);
        assert_eq!(
            recommendation.ambiguity_warning(),
            Some(ambiguity::NO_RANK_BASED_MODEL)
        );
    }

    #[test]
    fn test_dichotomous_association_surfaces_logistic_regression() {
        let query = StudyDesignQuery::association()
            .with_level(IntervalRatio)
            .with_distribution(DistributionStatus::Normal)
            .with_dichotomous_predictor_and_outcome();
        let recommendation = recommend(&query).unwrap();
        assert_eq!(recommendation.primary().procedure, P::PearsonCorrelation);
        assert!(recommendation.contains(P::OddsRatio));
        assert!(recommendation.contains(P::LogisticRegression));
    }

    #[test]
    fn test_multiple_predictors_of_dichotomous_outcome_use_logistic_regression() {
        let query = StudyDesignQuery::association()
            .with_level(Nominal)
            .with_predictors(3)
            .with_dichotomous_predictor_and_outcome();
        let recommendation = recommend(&query).unwrap();
        assert_eq!(recommendation.primary().procedure, P::LogisticRegression);
        assert!(recommendation.contains(P::ChiSquareIndependence));
        assert!(recommendation.contains(P::OddsRatio));
    }

    #[test]
    fn test_ambiguous_scale_without_override_reads_as_ordinal() {
        let query = StudyDesignQuery::difference()
            .with_ambiguous_scale(None)
            .with_groups(2)
            .independent()
            .with_distribution(DistributionStatus::Normal);
        let recommendation = recommend(&query).unwrap();
        assert_eq!(recommendation.primary().procedure, P::MannWhitneyU);
        assert!(recommendation.primary().rationale.contains("ambiguous level"));
        assert_eq!(
            recommendation.ambiguity_warning(),
            Some(ambiguity::SCALE_READ_AS_ORDINAL)
        );
    }

    #[test]
    fn test_ambiguous_scale_with_interval_override() {
        let query = StudyDesignQuery::difference()
            .with_ambiguous_scale(Some(ScaleOverride::TreatAsInterval))
            .with_groups(2)
            .independent()
            .with_distribution(DistributionStatus::Normal);
        let recommendation = recommend(&query).unwrap();
        assert_eq!(recommendation.primary().procedure, P::IndependentSamplesT);
        assert!(recommendation
            .primary()
            .rationale
            .contains("caller override TREAT_AS_INTERVAL"));
        assert!(!recommendation.is_ambiguous());
    }

    #[test]
    fn test_validation_failures_are_returned_not_guessed() {
        let error = recommend(&difference(
            IntervalRatio,
            1,
            Independent,
            DistributionStatus::Normal,
        ))
        .unwrap_err();
        assert_eq!(error.kind(), "IncoherentCombination");
        assert!(error.offending_fields().contains(&QueryField::SampleRelationship));
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let query = difference(IntervalRatio, 3, Paired, DistributionStatus::Unknown);
        let first = serde_json::to_string(&recommend(&query).unwrap()).unwrap();
        let second = serde_json::to_string(&recommend(&query).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
