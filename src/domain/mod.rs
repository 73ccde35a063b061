//! Domain types and decision logic for statistical-test selection
//!
//! This module contains the study-design model, its validation, the
//! procedure catalogue and the recommendation engine itself. Nothing in here
//! performs I/O.

pub mod design;
pub mod engine;
pub mod errors;
pub mod guidance;
pub mod procedure;
pub mod query;
pub mod recommendation;
pub mod types;
pub mod validation_constants;

pub use design::*;
pub use engine::{recommend, recommend_design};
pub use errors::*;
pub use procedure::*;
pub use query::*;
pub use recommendation::*;
pub use types::{Caveat, Rationale};
