//! Type Classifier - Averaged core-axis scores to a value type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AxisScores;
use crate::domain::foundation::{Axis, AxisScore};

/// Top score below this yields the balanced type.
pub const DOMINANT_AXIS_THRESHOLD: u8 = 65;

/// Top score needed before a combination type is considered.
pub const COMBINATION_PRIMARY_THRESHOLD: u8 = 70;

/// Second score needed before a combination type is considered.
pub const COMBINATION_SECONDARY_THRESHOLD: u8 = 65;

/// The ten value types a household can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValueType {
    #[serde(rename = "V1")]
    CostConscious,
    #[serde(rename = "V2")]
    PerformanceFirst,
    #[serde(rename = "V3")]
    DesignDriven,
    #[serde(rename = "V4")]
    LifestyleEase,
    #[serde(rename = "V5")]
    FutureFlexible,
    #[serde(rename = "V6")]
    PracticalValue,
    #[serde(rename = "V7")]
    SmartPerformance,
    #[serde(rename = "V8")]
    DesignPerformance,
    #[serde(rename = "V9")]
    ComfortLiving,
    #[serde(rename = "V10")]
    Balanced,
}

impl ValueType {
    pub fn all() -> &'static [ValueType] {
        &[
            ValueType::CostConscious,
            ValueType::PerformanceFirst,
            ValueType::DesignDriven,
            ValueType::LifestyleEase,
            ValueType::FutureFlexible,
            ValueType::PracticalValue,
            ValueType::SmartPerformance,
            ValueType::DesignPerformance,
            ValueType::ComfortLiving,
            ValueType::Balanced,
        ]
    }

    /// Catalog id ("V1".."V10").
    pub fn code(&self) -> &'static str {
        match self {
            ValueType::CostConscious => "V1",
            ValueType::PerformanceFirst => "V2",
            ValueType::DesignDriven => "V3",
            ValueType::LifestyleEase => "V4",
            ValueType::FutureFlexible => "V5",
            ValueType::PracticalValue => "V6",
            ValueType::SmartPerformance => "V7",
            ValueType::DesignPerformance => "V8",
            ValueType::ComfortLiving => "V9",
            ValueType::Balanced => "V10",
        }
    }

    /// Returns true for the four two-axis types.
    pub fn is_combination(&self) -> bool {
        COMBINATIONS.iter().any(|(_, _, t)| t == self)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Named two-axis combinations. Matching ignores pair order.
const COMBINATIONS: &[(Axis, Axis, ValueType)] = &[
    (Axis::Cost, Axis::Life, ValueType::PracticalValue),
    (Axis::Cost, Axis::Perf, ValueType::SmartPerformance),
    (Axis::Perf, Axis::Design, ValueType::DesignPerformance),
    (Axis::Perf, Axis::Life, ValueType::ComfortLiving),
];

/// A core axis with its averaged score, as ranked for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedAxis {
    pub axis: Axis,
    pub score: AxisScore,
}

/// Classifier from averaged core scores to a value type.
pub struct TypeClassifier;

impl TypeClassifier {
    /// Ranks the five core axes by score, highest first.
    ///
    /// The sort is stable over enumeration order, so equal scores keep
    /// COST before PERF before DESIGN and so on.
    pub fn rank_core_axes(scores: &AxisScores) -> Vec<RankedAxis> {
        let mut ranked: Vec<RankedAxis> = scores
            .core()
            .map(|(axis, score)| RankedAxis { axis, score })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Determines the value type.
    ///
    /// # Rules
    /// 1. top1 < 65 → Balanced
    /// 2. top1 ≥ 70 and top2 ≥ 65 and {top1, top2} is a named combination
    ///    → that combination
    /// 3. otherwise → single-axis type of top1
    ///
    /// # Edge Cases
    /// - Thresholds are inclusive (65 and 70 count)
    /// - A score gate pass on a pair without a named combination falls
    ///   back to the single-axis type
    pub fn determine(scores: &AxisScores) -> ValueType {
        let ranked = Self::rank_core_axes(scores);
        let (top1, top2) = match ranked.as_slice() {
            [first, second, ..] => (*first, *second),
            _ => return ValueType::Balanced,
        };

        if top1.score.value() < DOMINANT_AXIS_THRESHOLD {
            return ValueType::Balanced;
        }

        if top1.score.value() >= COMBINATION_PRIMARY_THRESHOLD
            && top2.score.value() >= COMBINATION_SECONDARY_THRESHOLD
        {
            if let Some(combined) = Self::combination(top1.axis, top2.axis) {
                return combined;
            }
        }

        Self::single_axis_type(top1.axis)
    }

    /// Looks up the named combination for an unordered axis pair.
    pub fn combination(first: Axis, second: Axis) -> Option<ValueType> {
        COMBINATIONS
            .iter()
            .find(|(a, b, _)| (*a == first && *b == second) || (*a == second && *b == first))
            .map(|(_, _, value_type)| *value_type)
    }

    /// Maps a dominant axis to its single-axis type.
    ///
    /// Support axes never dominate a classification; they map to Balanced.
    pub fn single_axis_type(axis: Axis) -> ValueType {
        match axis {
            Axis::Cost => ValueType::CostConscious,
            Axis::Perf => ValueType::PerformanceFirst,
            Axis::Design => ValueType::DesignDriven,
            Axis::Life => ValueType::LifestyleEase,
            Axis::Flex => ValueType::FutureFlexible,
            Axis::Involve | Axis::Assure => ValueType::Balanced,
        }
    }
}
