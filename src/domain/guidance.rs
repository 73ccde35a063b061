//! Caveat and warning texts attached to recommendations
//!
//! Kept in one place so that wrapping tools and tests can match them
//! verbatim.

/// Follow-up guidance after a significant omnibus result
pub mod post_hoc {
    pub const ONE_WAY_ANOVA: &str = "A significant one-way ANOVA shows only that some group means differ; \
        identify which pairs differ with a post hoc procedure: Tukey HSD for equal variances and equal group sizes, \
        Scheffé for a conservative correction, Newman-Keuls for more liberal comparisons, \
        or Dunnett when one group is a designated control.";

    pub const ONE_WAY_ANOVA_WITH_CONTROL: &str = "A significant one-way ANOVA shows only that some group means differ; \
        with a designated control group, Dunnett's test compares each treatment group against the control. \
        For all pairwise comparisons use Tukey HSD (equal variances and group sizes), \
        Scheffé (conservative) or Newman-Keuls (liberal).";

    pub const REPEATED_MEASURES_ANOVA: &str = "A significant repeated-measures ANOVA shows only that some occasions differ; \
        locate the differences with Bonferroni-adjusted pairwise comparisons.";

    pub const KRUSKAL_WALLIS: &str = "A significant Kruskal-Wallis test shows only that some groups differ; \
        locate the differences with Bonferroni-adjusted Mann-Whitney U tests or Dunn's test.";

    pub const FRIEDMAN: &str = "A significant Friedman test shows only that some occasions differ; \
        locate the differences with Bonferroni-adjusted Wilcoxon signed-rank tests.";

    pub const CHI_SQUARE: &str = "A significant chi-square across three or more groups shows only that the distributions differ somewhere; \
        locate the differences by partitioning the table or inspecting standardized residuals.";
}

/// Contingency-table guidance
pub mod contingency {
    pub const SMALL_EXPECTED_COUNTS: &str = "Chi-square is unreliable when any expected cell count is below 5; \
        use Fisher's exact test for a 2x2 table in that case. Expected counts cannot be checked from the design alone.";

    pub const EFFECT_SIZE: &str = "Report phi for a 2x2 table or Cramér's V for a larger table alongside the chi-square statistic.";

    pub const PAIRED_OMNIBUS: &str = "Three or more related nominal measurements are summarized here with chi-square of independence; \
        treat the result as an omnibus screen.";
}

/// Warnings raised when the engine cannot settle on a single answer
pub mod ambiguity {
    pub const DISTRIBUTION_UNKNOWN: &str = "Distribution status is UNKNOWN, so both parametric and nonparametric procedures are listed. \
        Establish normality (for example with a Shapiro-Wilk test) before trusting the parametric primary; \
        if the data are not normally distributed, use the nonparametric alternate.";

    pub const NO_RANK_BASED_MODEL: &str = "Distribution status is UNKNOWN and no rank-based equivalent exists for several predictors. \
        Establish normality of the residuals (for example with a Shapiro-Wilk test) before trusting the regression.";

    pub const SCALE_READ_AS_ORDINAL: &str = "The dependent variable is a summed rating scale whose level is ambiguous; \
        it was treated as ORDINAL. If the scores are normally distributed, resubmit with scaleOverride TREAT_AS_INTERVAL.";
}
