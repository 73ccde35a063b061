//! Catalogue of the inferential procedures the engine can recommend

use serde::{Serialize, Serializer};
use std::fmt;

/// Broad family a procedure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcedureFamily {
    /// Frequencies in categories (chi-square family, exact tests)
    ContingencyTable,
    /// Distribution-free comparisons and correlations on ranks
    RankBased,
    /// Parametric comparisons of means
    MeanComparison,
    Correlation,
    Regression,
    /// Strength-of-association statistics reported alongside a test
    EffectSize,
}

/// A named statistical procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatisticalProcedure {
    ChiSquareGoodnessOfFit,
    ChiSquareIndependence,
    FisherExact,
    McNemar,
    WilcoxonSignedRank,
    MannWhitneyU,
    KruskalWallis,
    Friedman,
    PairedSamplesT,
    IndependentSamplesT,
    OneWayAnova,
    RepeatedMeasuresAnova,
    PearsonCorrelation,
    SpearmanCorrelation,
    SimpleLinearRegression,
    MultipleLinearRegression,
    PhiCoefficient,
    CramersV,
    OddsRatio,
    LogisticRegression,
}

impl StatisticalProcedure {
    /// Every procedure, in catalogue order
    pub const ALL: [StatisticalProcedure; 20] = [
        StatisticalProcedure::ChiSquareGoodnessOfFit,
        StatisticalProcedure::ChiSquareIndependence,
        StatisticalProcedure::FisherExact,
        StatisticalProcedure::McNemar,
        StatisticalProcedure::WilcoxonSignedRank,
        StatisticalProcedure::MannWhitneyU,
        StatisticalProcedure::KruskalWallis,
        StatisticalProcedure::Friedman,
        StatisticalProcedure::PairedSamplesT,
        StatisticalProcedure::IndependentSamplesT,
        StatisticalProcedure::OneWayAnova,
        StatisticalProcedure::RepeatedMeasuresAnova,
        StatisticalProcedure::PearsonCorrelation,
        StatisticalProcedure::SpearmanCorrelation,
        StatisticalProcedure::SimpleLinearRegression,
        StatisticalProcedure::MultipleLinearRegression,
        StatisticalProcedure::PhiCoefficient,
        StatisticalProcedure::CramersV,
        StatisticalProcedure::OddsRatio,
        StatisticalProcedure::LogisticRegression,
    ];

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChiSquareGoodnessOfFit => "one-sample chi-square goodness-of-fit test",
            Self::ChiSquareIndependence => "chi-square test of independence",
            Self::FisherExact => "Fisher's exact test",
            Self::McNemar => "McNemar's test",
            Self::WilcoxonSignedRank => "Wilcoxon signed-rank test",
            Self::MannWhitneyU => "Mann-Whitney U test",
            Self::KruskalWallis => "Kruskal-Wallis test",
            Self::Friedman => "Friedman test",
            Self::PairedSamplesT => "paired-samples t-test",
            Self::IndependentSamplesT => "independent-samples t-test",
            Self::OneWayAnova => "one-way ANOVA",
            Self::RepeatedMeasuresAnova => "repeated-measures ANOVA",
            Self::PearsonCorrelation => "Pearson product-moment correlation",
            Self::SpearmanCorrelation => "Spearman rank-order correlation",
            Self::SimpleLinearRegression => "simple linear regression",
            Self::MultipleLinearRegression => "multiple linear regression",
            Self::PhiCoefficient => "phi coefficient",
            Self::CramersV => "Cramér's V",
            Self::OddsRatio => "odds ratio",
            Self::LogisticRegression => "logistic regression",
        }
    }

    /// One-line description used by the catalogue listing
    pub fn description(&self) -> &'static str {
        match self {
            Self::ChiSquareGoodnessOfFit => {
                "compares observed category frequencies in one sample with expected frequencies"
            }
            Self::ChiSquareIndependence => {
                "tests whether category frequencies are independent across groups or variables"
            }
            Self::FisherExact => {
                "exact test for 2x2 tables when expected cell counts are small"
            }
            Self::McNemar => "compares paired dichotomous outcomes measured on the same subjects",
            Self::WilcoxonSignedRank => "compares two paired measurements using signed ranks",
            Self::MannWhitneyU => {
                "compares two independent groups using ranks (Wilcoxon rank-sum)"
            }
            Self::KruskalWallis => "compares three or more independent groups using ranks",
            Self::Friedman => "compares three or more repeated measurements using ranks",
            Self::PairedSamplesT => "compares the means of two paired measurements",
            Self::IndependentSamplesT => "compares the means of two independent groups",
            Self::OneWayAnova => "compares the means of three or more independent groups",
            Self::RepeatedMeasuresAnova => {
                "compares the means of three or more repeated measurements"
            }
            Self::PearsonCorrelation => {
                "linear association between two normally distributed interval/ratio variables"
            }
            Self::SpearmanCorrelation => "monotonic association between two ranked variables",
            Self::SimpleLinearRegression => "predicts an interval/ratio outcome from one predictor",
            Self::MultipleLinearRegression => {
                "predicts an interval/ratio outcome from two or more predictors"
            }
            Self::PhiCoefficient => "strength of association in a 2x2 contingency table",
            Self::CramersV => "strength of association in a contingency table larger than 2x2",
            Self::OddsRatio => "odds of a dichotomous outcome given a dichotomous predictor",
            Self::LogisticRegression => "predicts a dichotomous outcome from one or more predictors",
        }
    }

    pub fn family(&self) -> ProcedureFamily {
        match self {
            Self::ChiSquareGoodnessOfFit
            | Self::ChiSquareIndependence
            | Self::FisherExact
            | Self::McNemar => ProcedureFamily::ContingencyTable,
            Self::WilcoxonSignedRank
            | Self::MannWhitneyU
            | Self::KruskalWallis
            | Self::Friedman
            | Self::SpearmanCorrelation => ProcedureFamily::RankBased,
            Self::PairedSamplesT
            | Self::IndependentSamplesT
            | Self::OneWayAnova
            | Self::RepeatedMeasuresAnova => ProcedureFamily::MeanComparison,
            Self::PearsonCorrelation => ProcedureFamily::Correlation,
            Self::SimpleLinearRegression
            | Self::MultipleLinearRegression
            | Self::LogisticRegression => ProcedureFamily::Regression,
            Self::PhiCoefficient | Self::CramersV | Self::OddsRatio => ProcedureFamily::EffectSize,
        }
    }

    /// Requires normally distributed interval/ratio data
    pub fn is_parametric(&self) -> bool {
        matches!(
            self,
            Self::PairedSamplesT
                | Self::IndependentSamplesT
                | Self::OneWayAnova
                | Self::RepeatedMeasuresAnova
                | Self::PearsonCorrelation
                | Self::SimpleLinearRegression
                | Self::MultipleLinearRegression
        )
    }

    /// Detects a difference somewhere among three or more groups
    pub fn is_omnibus(&self) -> bool {
        matches!(
            self,
            Self::ChiSquareIndependence
                | Self::OneWayAnova
                | Self::RepeatedMeasuresAnova
                | Self::KruskalWallis
                | Self::Friedman
        )
    }

    /// Compares exactly two groups or occasions
    pub fn is_pairwise(&self) -> bool {
        matches!(
            self,
            Self::FisherExact
                | Self::McNemar
                | Self::WilcoxonSignedRank
                | Self::MannWhitneyU
                | Self::PairedSamplesT
                | Self::IndependentSamplesT
        )
    }

    /// Distribution-free procedure to fall back on when normality fails
    pub fn nonparametric_counterpart(&self) -> Option<StatisticalProcedure> {
        match self {
            Self::PairedSamplesT => Some(Self::WilcoxonSignedRank),
            Self::IndependentSamplesT => Some(Self::MannWhitneyU),
            Self::OneWayAnova => Some(Self::KruskalWallis),
            Self::RepeatedMeasuresAnova => Some(Self::Friedman),
            Self::PearsonCorrelation | Self::SimpleLinearRegression => {
                Some(Self::SpearmanCorrelation)
            }
            _ => None,
        }
    }
}

impl fmt::Display for StatisticalProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StatisticalProcedure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Catalogue entry for listing the procedures the engine knows about
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueEntry {
    pub procedure_name: &'static str,
    pub family: ProcedureFamily,
    pub parametric: bool,
    pub omnibus: bool,
    pub description: &'static str,
}

impl From<StatisticalProcedure> for CatalogueEntry {
    fn from(procedure: StatisticalProcedure) -> Self {
        Self {
            procedure_name: procedure.as_str(),
            family: procedure.family(),
            parametric: procedure.is_parametric(),
            omnibus: procedure.is_omnibus(),
            description: procedure.description(),
        }
    }
}

/// Every procedure with its metadata, in a fixed order
pub fn catalogue() -> Vec<CatalogueEntry> {
    StatisticalProcedure::ALL
        .iter()
        .copied()
        .map(CatalogueEntry::from)
        .collect()
}
