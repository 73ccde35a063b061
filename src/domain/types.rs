//! Validated newtypes for the numeric attributes of a study design
//!
//! Counts arrive from callers as plain integers; these types make sure a
//! design that reaches the decision procedure has already been checked.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

use crate::domain::validation_constants;

/// Number of groups (or measurement occasions) being compared
///
/// A value of 1 means a single group; for paired designs that is one group
/// assessed twice.
#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct GroupCount(u32);

impl GroupCount {
    /// The normalized count for association designs (one sample, two variables)
    pub fn single() -> Self {
        Self::try_new(1).expect("1 is a valid group count")
    }

    /// Parse a wire-level count, rejecting zero, negatives and overflow
    pub fn from_wire(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().and_then(|n| Self::try_new(n).ok())
    }

    pub fn is_single(&self) -> bool {
        self.into_inner() == validation_constants::groups::SINGLE
    }

    pub fn is_pair(&self) -> bool {
        self.into_inner() == validation_constants::groups::PAIR
    }

    /// Three or more groups call for an omnibus test
    pub fn needs_omnibus(&self) -> bool {
        self.into_inner() >= validation_constants::groups::OMNIBUS_THRESHOLD
    }
}

/// Number of variables taking part in an association analysis
#[nutype(
    validate(greater_or_equal = 2),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct VariableCount(u32);

impl VariableCount {
    pub fn from_wire(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().and_then(|n| Self::try_new(n).ok())
    }

    /// A plain bivariate correlation
    pub fn is_bivariate(&self) -> bool {
        self.into_inner() == validation_constants::variables::BIVARIATE
    }
}

/// Number of predictor variables when an association is framed as prediction
#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct PredictorCount(u32);

impl PredictorCount {
    pub fn from_wire(raw: i64) -> Option<Self> {
        u32::try_from(raw).ok().and_then(|n| Self::try_new(n).ok())
    }

    pub fn is_multiple(&self) -> bool {
        self.into_inner() > 1
    }

    /// Total variable count implied by this many predictors and one outcome
    pub fn implied_variables(&self) -> u32 {
        self.into_inner().saturating_add(1)
    }
}

/// Why a procedure was chosen, naming the attributes that decided it
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 1000),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Serialize,
        Deserialize,
        AsRef,
        Deref,
        Display
    )
)]
pub struct Rationale(String);

impl Rationale {
    pub fn as_str(&self) -> &str {
        self
    }
}

/// Guidance that applies to the recommendation as a whole, such as post hoc
/// follow-up or an assumption to check before trusting the result
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 1000),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Serialize,
        Deserialize,
        AsRef,
        Deref,
        Display
    )
)]
pub struct Caveat(String);

impl Caveat {
    pub fn as_str(&self) -> &str {
        self
    }
}
