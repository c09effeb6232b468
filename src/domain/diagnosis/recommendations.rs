//! Recommendation Ranker - Rule-based points for builder categories.
//!
//! Rules are plain data: each [`RecommendationRule`] names a condition on
//! one averaged axis score and the points it awards to each category.
//! Justification texts are looked up in the catalog by (category, rule).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::AxisScores;
use crate::domain::catalog::{CatalogError, DiagnosisCatalog};
use crate::domain::foundation::Axis;
use ProviderCategory::*;

/// Number of categories returned in a report.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Justification used when a selected category collected none.
pub const FALLBACK_JUSTIFICATION: &str = "balanced choice";

/// The eight builder / provider categories, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProviderCategory {
    #[serde(rename = "B1")]
    Package,
    #[serde(rename = "B2")]
    SemiCustom,
    #[serde(rename = "B3")]
    ProposalDesign,
    #[serde(rename = "B4")]
    DesignStudio,
    #[serde(rename = "B5")]
    PerformanceSpecialist,
    #[serde(rename = "B6")]
    LocalBuilder,
    #[serde(rename = "B7")]
    WarrantyBacked,
    #[serde(rename = "B8")]
    TransparencyFocused,
}

impl ProviderCategory {
    pub fn all() -> &'static [ProviderCategory] {
        &[
            ProviderCategory::Package,
            ProviderCategory::SemiCustom,
            ProviderCategory::ProposalDesign,
            ProviderCategory::DesignStudio,
            ProviderCategory::PerformanceSpecialist,
            ProviderCategory::LocalBuilder,
            ProviderCategory::WarrantyBacked,
            ProviderCategory::TransparencyFocused,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ProviderCategory::Package => "B1",
            ProviderCategory::SemiCustom => "B2",
            ProviderCategory::ProposalDesign => "B3",
            ProviderCategory::DesignStudio => "B4",
            ProviderCategory::PerformanceSpecialist => "B5",
            ProviderCategory::LocalBuilder => "B6",
            ProviderCategory::WarrantyBacked => "B7",
            ProviderCategory::TransparencyFocused => "B8",
        }
    }
}

impl fmt::Display for ProviderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Identifies a rule; also the key of catalog justification texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleKey {
    CostHigh,
    PerfHigh,
    DesignHigh,
    LifeHigh,
    FlexHigh,
    InvolveHigh,
    InvolveLow,
    AssureHigh,
    AssureLow,
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            RuleKey::CostHigh => "COST_HIGH",
            RuleKey::PerfHigh => "PERF_HIGH",
            RuleKey::DesignHigh => "DESIGN_HIGH",
            RuleKey::LifeHigh => "LIFE_HIGH",
            RuleKey::FlexHigh => "FLEX_HIGH",
            RuleKey::InvolveHigh => "INVOLVE_HIGH",
            RuleKey::InvolveLow => "INVOLVE_LOW",
            RuleKey::AssureHigh => "ASSURE_HIGH",
            RuleKey::AssureLow => "ASSURE_LOW",
        };
        write!(f, "{}", code)
    }
}

/// Threshold test on one axis score (both bounds inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    AtLeast(u8),
    AtMost(u8),
}

impl Condition {
    pub fn holds(&self, score: u8) -> bool {
        match self {
            Condition::AtLeast(threshold) => score >= *threshold,
            Condition::AtMost(threshold) => score <= *threshold,
        }
    }
}

/// One auditable rule record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationRule {
    pub key: RuleKey,
    pub axis: Axis,
    pub condition: Condition,
    pub awards: &'static [(ProviderCategory, u32)],
}

impl RecommendationRule {
    pub fn applies(&self, scores: &AxisScores) -> bool {
        self.condition.holds(scores.get(self.axis).value())
    }
}

/// The rule table, applied in order.
pub const RULES: &[RecommendationRule] = &[
    RecommendationRule {
        key: RuleKey::CostHigh,
        axis: Axis::Cost,
        condition: Condition::AtLeast(70),
        awards: &[(Package, 3), (SemiCustom, 2)],
    },
    RecommendationRule {
        key: RuleKey::PerfHigh,
        axis: Axis::Perf,
        condition: Condition::AtLeast(70),
        awards: &[(PerformanceSpecialist, 3)],
    },
    RecommendationRule {
        key: RuleKey::DesignHigh,
        axis: Axis::Design,
        condition: Condition::AtLeast(70),
        awards: &[(DesignStudio, 3)],
    },
    RecommendationRule {
        key: RuleKey::LifeHigh,
        axis: Axis::Life,
        condition: Condition::AtLeast(70),
        awards: &[(ProposalDesign, 2), (LocalBuilder, 1)],
    },
    RecommendationRule {
        key: RuleKey::FlexHigh,
        axis: Axis::Flex,
        condition: Condition::AtLeast(70),
        awards: &[(ProposalDesign, 1), (LocalBuilder, 2), (WarrantyBacked, 1)],
    },
    RecommendationRule {
        key: RuleKey::InvolveHigh,
        axis: Axis::Involve,
        condition: Condition::AtLeast(70),
        awards: &[(ProposalDesign, 2), (DesignStudio, 2), (LocalBuilder, 2)],
    },
    RecommendationRule {
        key: RuleKey::InvolveLow,
        axis: Axis::Involve,
        condition: Condition::AtMost(40),
        awards: &[(Package, 2), (SemiCustom, 2), (WarrantyBacked, 2)],
    },
    RecommendationRule {
        key: RuleKey::AssureHigh,
        axis: Axis::Assure,
        condition: Condition::AtLeast(70),
        awards: &[(TransparencyFocused, 3), (WarrantyBacked, 2)],
    },
    RecommendationRule {
        key: RuleKey::AssureLow,
        axis: Axis::Assure,
        condition: Condition::AtMost(40),
        awards: &[(LocalBuilder, 1)],
    },
];

/// A selected category with its points and reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: ProviderCategory,
    pub label: String,
    pub points: u32,
    pub justifications: Vec<String>,
}

#[derive(Debug, Default)]
struct Tally {
    points: u32,
    justifications: Vec<String>,
}

/// Ranks provider categories against averaged scores.
pub struct RecommendationRanker;

impl RecommendationRanker {
    /// Applies [`RULES`] and returns the top categories.
    ///
    /// # Edge Cases
    /// - No rule fires: empty list
    /// - Equal points: declaration order (B1 before B2 ...)
    /// - Duplicate justification text within a category: kept once
    /// - Selected category without justification: [`FALLBACK_JUSTIFICATION`]
    ///
    /// # Errors
    /// A selected category missing from the catalog.
    pub fn rank(
        scores: &AxisScores,
        catalog: &DiagnosisCatalog,
    ) -> Result<Vec<Recommendation>, CatalogError> {
        Self::rank_with(RULES, scores, catalog)
    }

    /// Same as [`RecommendationRanker::rank`] over an arbitrary rule table.
    pub fn rank_with(
        rules: &[RecommendationRule],
        scores: &AxisScores,
        catalog: &DiagnosisCatalog,
    ) -> Result<Vec<Recommendation>, CatalogError> {
        let mut tallies: BTreeMap<ProviderCategory, Tally> = BTreeMap::new();

        for rule in rules.iter().filter(|r| r.applies(scores)) {
            for (category, points) in rule.awards {
                let tally = tallies.entry(*category).or_default();
                tally.points += points;
                if let Some(text) = catalog.justification(*category, rule.key) {
                    if !tally.justifications.iter().any(|j| j == text) {
                        tally.justifications.push(text.to_string());
                    }
                }
            }
        }

        // BTreeMap iterates in declaration order, so the stable sort keeps it for ties.
        let mut ranked: Vec<(ProviderCategory, Tally)> = tallies
            .into_iter()
            .filter(|(_, tally)| tally.points > 0)
            .collect();
        ranked.sort_by(|(_, x), (_, y)| y.points.cmp(&x.points));

        ranked
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(|(category, tally)| {
                let profile = catalog.provider_category(category)?;
                let justifications = if tally.justifications.is_empty() {
                    vec![FALLBACK_JUSTIFICATION.to_string()]
                } else {
                    tally.justifications
                };
                Ok(Recommendation {
                    category,
                    label: profile.label.clone(),
                    points: tally.points,
                    justifications,
                })
            })
            .collect()
    }
}
