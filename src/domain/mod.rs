//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Questionnaire and report content, loaded from YAML
//! - `diagnosis` - Pure scoring, classification and ranking services
//! - `session` - Questionnaire state between first answer and report

pub mod catalog;
pub mod diagnosis;
pub mod foundation;
pub mod session;
