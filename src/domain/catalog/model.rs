//! Catalog content types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::diagnosis::{ProviderCategory, RuleKey, SizeType, ValueType};
use crate::domain::foundation::{Axis, AxisGroup, Likert};

/// Display metadata for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDefinition {
    pub id: Axis,
    pub label: String,
    pub group: AxisGroup,
}

/// Label shown for one Likert answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikertOption {
    pub value: Likert,
    pub label: String,
}

/// A value question contributing to exactly one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueQuestion {
    pub id: String,
    pub axis: Axis,
    /// Agreement lowers the axis score instead of raising it.
    #[serde(default)]
    pub reverse: bool,
    /// Carried for content authors; scoring weighs every question equally.
    #[serde(default = "default_weight")]
    pub weight: f64,
    pub text: String,
    #[serde(default)]
    pub help: Option<String>,
}

fn default_weight() -> f64 {
    1.0
}

/// One selectable option of a household question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Yes/no follow-up shown for some household answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub id: String,
    pub text: String,
    /// Parent answers that reveal this follow-up.
    pub shown_when: Vec<String>,
}

/// Household question metadata for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdQuestion {
    pub id: String,
    /// Field of the household profile this question fills.
    pub field: String,
    pub text: String,
    #[serde(default)]
    pub help: Option<String>,
    pub options: Vec<ChoiceOption>,
    #[serde(default)]
    pub follow_up: Option<FollowUpQuestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetQuestionKind {
    Number,
    Select,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericOption {
    pub value: f64,
    pub label: String,
}

/// Budget question metadata for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetQuestion {
    pub id: String,
    pub field: String,
    pub text: String,
    pub kind: BudgetQuestionKind,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub default: Option<f64>,
    #[serde(default)]
    pub options: Vec<NumericOption>,
}

/// Narrative content for one value type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueTypeProfile {
    pub id: ValueType,
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub policy_bullets: Vec<String>,
    #[serde(default)]
    pub layout_patterns: Vec<String>,
    #[serde(default)]
    pub budget_rules: Vec<String>,
    #[serde(default)]
    pub pitfalls: Vec<String>,
    #[serde(default)]
    pub builder_selection_points: Vec<String>,
}

/// Narrative content for one size type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeTypeProfile {
    pub id: SizeType,
    pub label: String,
    #[serde(default)]
    pub layout_overrides: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Label and rule justifications for one provider category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderCategoryProfile {
    pub id: ProviderCategory,
    pub label: String,
    #[serde(default)]
    pub justifications: BTreeMap<RuleKey, String>,
}
