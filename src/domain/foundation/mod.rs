//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the home diagnosis domain.

mod axis;
mod axis_score;
mod errors;
mod ids;
mod likert;
mod timestamp;

pub use axis::{Axis, AxisGroup};
pub use axis_score::AxisScore;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use likert::Likert;
pub use timestamp::Timestamp;
