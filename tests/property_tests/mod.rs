//! Property-based testing for recommendation invariants
//!
//! This module provides generators over the whole `StudyDesignQuery` input
//! space and checks that the engine's invariants hold for every query.

pub mod recommendation_invariants;
