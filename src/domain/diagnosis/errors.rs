//! Diagnosis error types.

use thiserror::Error;

use crate::domain::catalog::CatalogError;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Failures of a diagnosis run. Both are caller or configuration faults;
/// no partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagnosisError {
    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Paired diagnosis requires answers from respondent B")]
    MissingRespondent,
}

impl From<DiagnosisError> for DomainError {
    fn from(err: DiagnosisError) -> Self {
        let code = match &err {
            DiagnosisError::Catalog(_) => ErrorCode::CatalogInvalid,
            DiagnosisError::MissingRespondent => ErrorCode::IncompleteSession,
        };
        DomainError::new(code, err.to_string())
    }
}
