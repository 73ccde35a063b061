//! Application services
//!
//! Coordinates the pure recommendation engine with input decoding, output
//! encoding and settings.

pub mod app;

pub use app::{Application, Outcome, Report};
