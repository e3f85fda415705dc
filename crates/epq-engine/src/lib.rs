//! Construct scoring engine for the Environment Preference Questionnaire (EPQ).
//!
//! Employers profile a role with a fixed item bank, applicants profile themselves with a
//! variable-option bank, and both flows reduce their chosen answers to per-construct averages,
//! bands, and derived workplace environment dimensions.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
