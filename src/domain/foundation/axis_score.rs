//! AxisScore value object (0-100 scale, 50 = neutral).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A normalized axis score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisScore(u8);

impl AxisScore {
    pub const MIN: Self = Self(0);

    /// Score of an axis with no answers, or with only neutral answers.
    pub const NEUTRAL: Self = Self(50);

    pub const MAX: Self = Self(100);

    /// Creates a new AxisScore, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates an AxisScore, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "axis_score",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Normalizes a raw sum of `answered` symmetric scores (each in -2..=2).
    ///
    /// `round(((sum + 2n) / 4n) * 100)` with half-up rounding, so -2n maps
    /// to 0, 0 maps to 50 and +2n maps to 100. Zero answers yield NEUTRAL.
    pub fn from_raw_sum(sum: i32, answered: u32) -> Self {
        if answered == 0 {
            return Self::NEUTRAL;
        }
        let n = answered as i64;
        let shifted = (i64::from(sum) + 2 * n).clamp(0, 4 * n);
        // round-half-up of shifted * 100 / 4n in integer arithmetic
        let value = (shifted * 100 * 2 + 4 * n) / (8 * n);
        Self::new(value as u8)
    }

    /// Returns the half-up rounded midpoint of two scores.
    pub fn midpoint(&self, other: AxisScore) -> AxisScore {
        Self::new(((u16::from(self.0) + u16::from(other.0) + 1) / 2) as u8)
    }

    /// Returns the absolute difference between two scores.
    pub fn distance(&self, other: AxisScore) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for AxisScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for AxisScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
