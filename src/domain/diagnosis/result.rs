//! DiagnosisResult - The immutable report produced by one diagnosis run.

use serde::{Deserialize, Serialize};

use super::{
    AxisScores, BudgetEstimate, DiagnosisMode, FloorAreaRange, GapRecord, RankedAxis,
    Recommendation, SizeType, ValueType,
};

/// Scores per respondent plus the averaged set used for classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub respondent_a: AxisScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent_b: Option<AxisScores>,
    pub average: AxisScores,
}

/// Catalog advice merged for the determined value and size types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceSections {
    pub policy: Vec<String>,
    pub layout: Vec<String>,
    pub budget: Vec<String>,
    pub pitfalls: Vec<String>,
    pub builder_selection: Vec<String>,
    pub next_steps: Vec<String>,
    pub disclaimer: Vec<String>,
}

/// Full report for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub mode: DiagnosisMode,
    pub value_type: ValueType,
    pub value_type_name: String,
    pub summary: String,
    pub size_type: SizeType,
    pub size_label: String,
    pub display_name: String,
    pub tsubo: FloorAreaRange,
    pub scores: ScoreBreakdown,
    pub top_axes: Vec<RankedAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gaps: Option<Vec<GapRecord>>,
    pub advice: AdviceSections,
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetEstimate>,
}

impl DiagnosisResult {
    /// Returns true when any reported gap is a risk.
    pub fn has_risk_gaps(&self) -> bool {
        self.gaps
            .as_ref()
            .map(|gaps| gaps.iter().any(|g| g.severity == super::GapSeverity::Risk))
            .unwrap_or(false)
    }
}
