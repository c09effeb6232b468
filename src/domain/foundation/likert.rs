//! Likert answer value object (1-5 agreement scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Five-point agreement answer: 1 (strongly disagree) to 5 (strongly agree).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Likert {
    StronglyDisagree = 1,
    Disagree = 2,
    #[default]
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl Likert {
    /// Creates a Likert answer from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Likert::StronglyDisagree),
            2 => Ok(Likert::Disagree),
            3 => Ok(Likert::Neutral),
            4 => Ok(Likert::Agree),
            5 => Ok(Likert::StronglyAgree),
            _ => Err(ValidationError::out_of_range("likert", 1, 5, value as i32)),
        }
    }

    /// Returns the numeric answer (1-5).
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the symmetric raw score: 5→+2, 4→+1, 3→0, 2→-1, 1→-2.
    pub fn raw_score(&self) -> i32 {
        i32::from(self.value()) - 3
    }

    /// Returns the answer with opposite polarity (1↔5, 2↔4).
    pub fn mirrored(&self) -> Self {
        match self {
            Likert::StronglyDisagree => Likert::StronglyAgree,
            Likert::Disagree => Likert::Agree,
            Likert::Neutral => Likert::Neutral,
            Likert::Agree => Likert::Disagree,
            Likert::StronglyAgree => Likert::StronglyDisagree,
        }
    }
}

impl TryFrom<u8> for Likert {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<Likert> for u8 {
    fn from(value: Likert) -> Self {
        value.value()
    }
}

impl fmt::Display for Likert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likert_try_from_u8_accepts_valid_values() {
        assert_eq!(Likert::try_from_u8(1).unwrap(), Likert::StronglyDisagree);
        assert_eq!(Likert::try_from_u8(3).unwrap(), Likert::Neutral);
        assert_eq!(Likert::try_from_u8(5).unwrap(), Likert::StronglyAgree);
    }

    #[test]
    fn likert_try_from_u8_rejects_out_of_range() {
        assert!(Likert::try_from_u8(0).is_err());
        assert!(Likert::try_from_u8(6).is_err());

        match Likert::try_from_u8(9) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "likert");
                assert_eq!(min, 1);
                assert_eq!(max, 5);
                assert_eq!(actual, 9);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn likert_raw_score_is_symmetric() {
        assert_eq!(Likert::StronglyAgree.raw_score(), 2);
        assert_eq!(Likert::Agree.raw_score(), 1);
        assert_eq!(Likert::Neutral.raw_score(), 0);
        assert_eq!(Likert::Disagree.raw_score(), -1);
        assert_eq!(Likert::StronglyDisagree.raw_score(), -2);
    }

    #[test]
    fn likert_mirrored_flips_polarity() {
        assert_eq!(Likert::StronglyAgree.mirrored(), Likert::StronglyDisagree);
        assert_eq!(Likert::Disagree.mirrored(), Likert::Agree);
        assert_eq!(Likert::Neutral.mirrored(), Likert::Neutral);
    }

    #[test]
    fn likert_default_is_neutral() {
        assert_eq!(Likert::default(), Likert::Neutral);
    }

    #[test]
    fn likert_serializes_as_number() {
        let json = serde_json::to_string(&Likert::Agree).unwrap();
        assert_eq!(json, "4");
    }

    #[test]
    fn likert_deserialize_rejects_out_of_range() {
        let ok: Likert = serde_json::from_str("2").unwrap();
        assert_eq!(ok, Likert::Disagree);
        assert!(serde_json::from_str::<Likert>("7").is_err());
        assert!(serde_json::from_str::<Likert>("0").is_err());
    }
}
