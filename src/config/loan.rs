//! Loan assumption configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::diagnosis::{LoanDefaults, DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_TERM_YEARS};

/// Defaults applied when a respondent leaves loan terms blank
#[derive(Debug, Clone, Deserialize)]
pub struct LoanConfig {
    /// Repayment term in years
    #[serde(default = "default_term_years")]
    pub default_term_years: u32,

    /// Fixed annual interest rate in percent
    #[serde(default = "default_annual_rate_percent")]
    pub default_annual_rate_percent: f64,
}

impl LoanConfig {
    pub fn loan_defaults(&self) -> LoanDefaults {
        LoanDefaults {
            term_years: self.default_term_years,
            annual_rate_percent: self.default_annual_rate_percent,
        }
    }

    /// Validate loan configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_term_years == 0 || self.default_term_years > 50 {
            return Err(ValidationError::InvalidLoanTerm);
        }
        if !(0.0..=30.0).contains(&self.default_annual_rate_percent) {
            return Err(ValidationError::InvalidInterestRate);
        }
        Ok(())
    }
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self {
            default_term_years: default_term_years(),
            default_annual_rate_percent: default_annual_rate_percent(),
        }
    }
}

fn default_term_years() -> u32 {
    DEFAULT_TERM_YEARS
}

fn default_annual_rate_percent() -> f64 {
    DEFAULT_ANNUAL_RATE_PERCENT
}
