//! Catalog error types.

use thiserror::Error;

use crate::domain::diagnosis::{ProviderCategory, SizeType, ValueType};
use crate::domain::foundation::Axis;

/// Errors raised while loading or reading a catalog.
///
/// All of these are configuration faults: the engine cannot produce a
/// report without the matching content.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Catalog could not be parsed: {0}")]
    Parse(String),

    #[error("Catalog file could not be read: {0}")]
    Io(String),

    #[error("Catalog has no definition for axis {0}")]
    MissingAxis(Axis),

    #[error("Catalog declares axis {0} in the wrong group")]
    AxisGroupMismatch(Axis),

    #[error("Catalog contains a question with an empty id")]
    EmptyQuestionId,

    #[error("Catalog contains duplicate question id '{0}'")]
    DuplicateQuestion(String),

    #[error("Catalog has no content for value type {0}")]
    MissingValueType(ValueType),

    #[error("Catalog has no content for size type {0}")]
    MissingSizeType(SizeType),

    #[error("Catalog has no content for provider category {0}")]
    MissingProviderCategory(ProviderCategory),
}
