//! Validation constants for study-design attributes
//!
//! This module centralizes the thresholds the decision procedure branches on
//! so that the rules read in one place.

/// Group count thresholds
pub mod groups {
    /// A one-group design (goodness-of-fit, or one group assessed twice)
    pub const SINGLE: u32 = 1;

    /// Two-group comparisons use a pairwise test
    pub const PAIR: u32 = 2;

    /// From this many groups on only an omnibus test is acceptable
    pub const OMNIBUS_THRESHOLD: u32 = 3;
}

/// Association variable counts
pub mod variables {
    /// A plain two-variable correlation
    pub const BIVARIATE: u32 = 2;

    /// Default variable count when an association query omits it
    pub const DEFAULT_COUNT: i64 = 2;
}
