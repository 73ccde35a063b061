//! Stats Advisor - statistical-test recommendation engine
//!
//! Given the measurement properties of a research design, this library
//! returns the inferential statistical test(s) that fit it, together with the
//! rationale for each choice and an explicit warning whenever the design
//! leaves the choice ambiguous.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Application;
pub use domain::{recommend, Recommendation, RecommendationError, StudyDesignQuery};
pub use error::{Error, Result};
