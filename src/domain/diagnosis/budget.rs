//! Budget Estimator - Maximum loan principal from a monthly payment capacity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Term used when the respondent leaves it blank.
pub const DEFAULT_TERM_YEARS: u32 = 35;

/// Annual rate (percent) used when the respondent leaves it blank.
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 1.5;

/// Largest monthly payment capacity accepted from a questionnaire.
pub const MAX_MONTHLY_CAPACITY: i64 = 10_000_000;

/// Largest down payment accepted from a questionnaire.
pub const MAX_DOWN_PAYMENT: i64 = 10_000_000_000;

/// Budget answers. Everything is optional; an absent or non-positive
/// monthly capacity means "no estimate".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInputs {
    #[serde(default)]
    pub monthly_capacity: Option<i64>,
    #[serde(default)]
    pub down_payment: Option<i64>,
    #[serde(default)]
    pub term_years: Option<u32>,
    #[serde(default)]
    pub annual_rate_percent: Option<f64>,
}

impl BudgetInputs {
    pub fn new(monthly_capacity: i64) -> Self {
        Self {
            monthly_capacity: Some(monthly_capacity),
            ..Self::default()
        }
    }

    pub fn with_down_payment(mut self, amount: i64) -> Self {
        self.down_payment = Some(amount);
        self
    }

    pub fn with_term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    pub fn with_annual_rate_percent(mut self, rate: f64) -> Self {
        self.annual_rate_percent = Some(rate);
        self
    }

    /// Rejects values a questionnaire would never submit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(capacity) = self.monthly_capacity {
            if capacity > MAX_MONTHLY_CAPACITY {
                return Err(ValidationError::invalid_format(
                    "monthly_capacity",
                    format!("{} exceeds {}", capacity, MAX_MONTHLY_CAPACITY),
                ));
            }
        }
        if let Some(down) = self.down_payment {
            if down < 0 {
                return Err(ValidationError::invalid_format(
                    "down_payment",
                    "must not be negative",
                ));
            }
            if down > MAX_DOWN_PAYMENT {
                return Err(ValidationError::invalid_format(
                    "down_payment",
                    format!("{} exceeds {}", down, MAX_DOWN_PAYMENT),
                ));
            }
        }
        if let Some(years) = self.term_years {
            if years == 0 || years > 50 {
                return Err(ValidationError::out_of_range("term_years", 1, 50, years as i32));
            }
        }
        if let Some(rate) = self.annual_rate_percent {
            if !rate.is_finite() || !(0.0..=30.0).contains(&rate) {
                return Err(ValidationError::invalid_format(
                    "annual_rate_percent",
                    format!("{} is not between 0 and 30", rate),
                ));
            }
        }
        Ok(())
    }
}

/// Defaults applied to missing budget answers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanDefaults {
    pub term_years: u32,
    pub annual_rate_percent: f64,
}

impl Default for LoanDefaults {
    fn default() -> Self {
        Self {
            term_years: DEFAULT_TERM_YEARS,
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
        }
    }
}

/// Estimated affordable budget, echoing the inputs used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEstimate {
    pub loan_max: i64,
    pub total_budget_approx: i64,
    pub monthly_payment: i64,
    pub years: u32,
    pub rate: f64,
}

/// Present value of an annuity, applied to housing loans.
pub struct BudgetEstimator;

impl BudgetEstimator {
    /// Estimates with the standard 35 year / 1.5 % defaults.
    pub fn estimate(inputs: &BudgetInputs) -> Option<BudgetEstimate> {
        Self::estimate_with(inputs, LoanDefaults::default())
    }

    /// Estimates the maximum loan serviceable by the monthly capacity.
    ///
    /// `loan = capacity × (1 − (1 + r)^−n) / r` with `r = rate / 100 / 12`
    /// and `n = years × 12`; `loan = capacity × n` when `r == 0`.
    ///
    /// # Edge Cases
    /// - Capacity absent or ≤ 0: `None`
    /// - Down payment absent: total equals the loan
    /// - Unvalidated amounts too large for `i64` saturate instead of overflowing
    pub fn estimate_with(inputs: &BudgetInputs, defaults: LoanDefaults) -> Option<BudgetEstimate> {
        let capacity = inputs.monthly_capacity.filter(|c| *c > 0)?;
        let years = inputs.term_years.unwrap_or(defaults.term_years);
        let rate = inputs
            .annual_rate_percent
            .unwrap_or(defaults.annual_rate_percent);

        let monthly_rate = rate / 100.0 / 12.0;
        let payments = f64::from(years) * 12.0;
        let capacity_f = capacity as f64;

        let loan = if monthly_rate == 0.0 {
            capacity_f * payments
        } else {
            capacity_f * (1.0 - (1.0 + monthly_rate).powf(-payments)) / monthly_rate
        };
        let loan_max = loan.round() as i64;

        Some(BudgetEstimate {
            loan_max,
            total_budget_approx: loan_max.saturating_add(inputs.down_payment.unwrap_or(0)),
            monthly_payment: capacity,
            years,
            rate,
        })
    }
}
