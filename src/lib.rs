//! Home Diagnosis - Values-based home-building diagnosis
//!
//! Scores one or two respondents' Likert answers across seven value axes,
//! classifies a value type, estimates floor area from the household profile,
//! surfaces disagreement between partners, ranks builder categories and
//! assembles a report. Questionnaire and report content comes from a YAML
//! catalog that is injected rather than held globally.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
