//! Recommendation output
//!
//! A `Recommendation` always holds at least one procedure, and the first one
//! is the only primary. `RecommendationBuilder` enforces that shape: it can
//! only be started from a primary procedure.

use serde::Serialize;

use crate::domain::procedure::StatisticalProcedure;
use crate::domain::types::{Caveat, Rationale};

/// One procedure in a recommendation, with the reason it was chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedProcedure {
    #[serde(skip)]
    pub procedure: StatisticalProcedure,
    pub procedure_name: &'static str,
    pub rationale: Rationale,
    pub is_primary: bool,
}

impl RecommendedProcedure {
    fn new(procedure: StatisticalProcedure, rationale: Rationale, is_primary: bool) -> Self {
        Self {
            procedure,
            procedure_name: procedure.as_str(),
            rationale,
            is_primary,
        }
    }
}

/// The engine's output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    procedures: Vec<RecommendedProcedure>,
    ambiguity_warning: Option<String>,
    caveats: Vec<Caveat>,
}

impl Recommendation {
    pub fn procedures(&self) -> &[RecommendedProcedure] {
        &self.procedures
    }

    pub fn primary(&self) -> &RecommendedProcedure {
        // The builder always seeds the list with the primary procedure
        &self.procedures[0]
    }

    pub fn alternates(&self) -> impl Iterator<Item = &RecommendedProcedure> {
        self.procedures.iter().skip(1)
    }

    pub fn ambiguity_warning(&self) -> Option<&str> {
        self.ambiguity_warning.as_deref()
    }

    pub fn is_ambiguous(&self) -> bool {
        self.ambiguity_warning.is_some()
    }

    pub fn caveats(&self) -> &[Caveat] {
        &self.caveats
    }

    pub fn contains(&self, procedure: StatisticalProcedure) -> bool {
        self.procedures.iter().any(|entry| entry.procedure == procedure)
    }

    /// Procedure names in recommendation order
    pub fn names(&self) -> Vec<&'static str> {
        self.procedures
            .iter()
            .map(|entry| entry.procedure_name)
            .collect()
    }
}

/// Accumulates procedures, caveats and warnings for one recommendation
#[derive(Debug, Clone)]
pub struct RecommendationBuilder {
    procedures: Vec<RecommendedProcedure>,
    ambiguity_warning: Option<String>,
    caveats: Vec<Caveat>,
}

impl RecommendationBuilder {
    pub fn primary(procedure: StatisticalProcedure, rationale: Rationale) -> Self {
        Self {
            procedures: vec![RecommendedProcedure::new(procedure, rationale, true)],
            ambiguity_warning: None,
            caveats: Vec::new(),
        }
    }

    /// Add a non-primary procedure; a procedure already present is skipped
    pub fn alternate(mut self, procedure: StatisticalProcedure, rationale: Rationale) -> Self {
        if !self.procedures.iter().any(|entry| entry.procedure == procedure) {
            self.procedures
                .push(RecommendedProcedure::new(procedure, rationale, false));
        }
        self
    }

    pub fn caveat(mut self, caveat: Caveat) -> Self {
        if !self.caveats.contains(&caveat) {
            self.caveats.push(caveat);
        }
        self
    }

    /// Flag the recommendation as ambiguous; repeated warnings are joined
    pub fn ambiguity(mut self, warning: impl AsRef<str>) -> Self {
        let warning = warning.as_ref();
        self.ambiguity_warning = Some(match self.ambiguity_warning.take() {
            Some(existing) => format!("{existing} {warning}"),
            None => warning.to_string(),
        });
        self
    }

    /// Fold another selection in as alternatives: its primary and alternates
    /// become alternates here and its caveats are kept
    pub fn with_alternative(self, other: RecommendationBuilder) -> Self {
        let RecommendationBuilder {
            procedures,
            ambiguity_warning,
            caveats,
        } = other;
        let mut builder = procedures.into_iter().fold(self, |builder, entry| {
            builder.alternate(entry.procedure, entry.rationale)
        });
        builder = caveats
            .into_iter()
            .fold(builder, |builder, caveat| builder.caveat(caveat));
        match ambiguity_warning {
            Some(warning) => builder.ambiguity(warning),
            None => builder,
        }
    }

    pub fn primary_procedure(&self) -> StatisticalProcedure {
        self.procedures[0].procedure
    }

    pub fn build(self) -> Recommendation {
        Recommendation {
            procedures: self.procedures,
            ambiguity_warning: self.ambiguity_warning,
            caveats: self.caveats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn because(text: &str) -> Rationale {
        Rationale::try_new(text.to_string()).unwrap()
    }

    fn note(text: &str) -> Caveat {
        Caveat::try_new(text.to_string()).unwrap()
    }

    #[test]
    fn test_builder_keeps_primary_first() {
        let recommendation = RecommendationBuilder::primary(
            StatisticalProcedure::ChiSquareIndependence,
            because("two independent groups, nominal outcome"),
        )
        .alternate(StatisticalProcedure::FisherExact, because("small expected cell counts"))
        .build();

        assert_eq!(
            recommendation.names(),
            vec!["chi-square test of independence", "Fisher's exact test"]
        );
        assert!(recommendation.primary().is_primary);
        assert_eq!(recommendation.alternates().filter(|p| p.is_primary).count(), 0);
        assert!(!recommendation.is_ambiguous());
    }

    #[test]
    fn test_duplicate_alternates_and_caveats_are_skipped() {
        let recommendation = RecommendationBuilder::primary(StatisticalProcedure::OddsRatio, because("a"))
            .alternate(StatisticalProcedure::OddsRatio, because("b"))
            .caveat(note("check cells"))
            .caveat(note("check cells"))
            .build();
        assert_eq!(recommendation.procedures().len(), 1);
        assert_eq!(recommendation.caveats().len(), 1);
    }

    #[test]
    fn test_with_alternative_demotes_the_other_primary() {
        let parametric = RecommendationBuilder::primary(StatisticalProcedure::OneWayAnova, because("normal"))
            .caveat(note("post hoc for ANOVA"));
        let rank = RecommendationBuilder::primary(StatisticalProcedure::KruskalWallis, because("ranks"))
            .caveat(note("post hoc for Kruskal-Wallis"));

        let recommendation = parametric
            .with_alternative(rank)
            .ambiguity("normality unknown")
            .build();

        assert_eq!(
            recommendation.names(),
            vec!["one-way ANOVA", "Kruskal-Wallis test"]
        );
        assert!(!recommendation.procedures()[1].is_primary);
        assert_eq!(recommendation.caveats().len(), 2);
        assert_eq!(recommendation.ambiguity_warning(), Some("normality unknown"));
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let recommendation =
            RecommendationBuilder::primary(StatisticalProcedure::PearsonCorrelation, because(" why ")).build();
        let json = serde_json::to_value(&recommendation).unwrap();

        assert_eq!(
            json["procedures"][0]["procedureName"],
            "Pearson product-moment correlation"
        );
        assert_eq!(json["procedures"][0]["isPrimary"], true);
        assert_eq!(json["procedures"][0]["rationale"], "why");
        assert!(json["ambiguityWarning"].is_null());
        assert!(json["procedures"][0].get("procedure").is_none());
    }
}
