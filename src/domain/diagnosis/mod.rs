//! Diagnosis Module - Pure scoring and classification services.
//!
//! Everything here is synchronous and free of I/O. Each calculator is a
//! stateless unit struct; [`DiagnosisEngine`] composes them against an
//! injected [`DiagnosisCatalog`](crate::domain::catalog::DiagnosisCatalog).
//!
//! # Components
//!
//! - `AxisScoreCalculator` - Likert answers to 0-100 scores per axis
//! - `TypeClassifier` - Averaged core scores to one of 10 value types
//! - `HouseholdSizeEstimator` - Household profile to floor area and size type
//! - `GapAnalyzer` - Divergence between two respondents
//! - `RecommendationRanker` - Rule-table points for 8 provider categories
//! - `BudgetEstimator` - Annuity-based maximum loan
//! - `DiagnosisEngine` - End-to-end report

mod answers;
mod axis_scores;
mod budget;
mod engine;
mod errors;
mod floor_area;
mod gaps;
mod recommendations;
mod result;
mod value_type;

pub use answers::AnswerSet;
pub use axis_scores::{AxisScoreCalculator, AxisScores};
pub use budget::{
    BudgetEstimate, BudgetEstimator, BudgetInputs, LoanDefaults, DEFAULT_ANNUAL_RATE_PERCENT,
    DEFAULT_TERM_YEARS, MAX_DOWN_PAYMENT, MAX_MONTHLY_CAPACITY,
};
pub use engine::{DiagnosisEngine, DiagnosisInput, DiagnosisMode, DISPLAY_NAME_SEPARATOR, TOP_AXES};
pub use errors::DiagnosisError;
pub use floor_area::{
    FloorAreaRange, GuestStays, HobbyStorage, HouseholdProfile, HouseholdSizeEstimator,
    RemoteWork, SizeType, StoragePreference, WorkspaceNeed,
};
pub use gaps::{GapAnalyzer, GapRecord, GapSeverity, GAP_CHECK_THRESHOLD, GAP_RISK_THRESHOLD};
pub use recommendations::{
    Condition, ProviderCategory, Recommendation, RecommendationRanker, RecommendationRule,
    RuleKey, FALLBACK_JUSTIFICATION, MAX_RECOMMENDATIONS, RULES,
};
pub use result::{AdviceSections, DiagnosisResult, ScoreBreakdown};
pub use value_type::{RankedAxis, TypeClassifier, ValueType};
