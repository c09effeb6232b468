//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Catalog path must not be empty when set")]
    EmptyCatalogPath,

    #[error("Loan term must be between 1 and 50 years")]
    InvalidLoanTerm,

    #[error("Annual interest rate must be between 0 and 30 percent")]
    InvalidInterestRate,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
