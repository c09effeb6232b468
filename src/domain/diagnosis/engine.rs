//! Diagnosis Engine - Composes every calculator into one report.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::{
    AdviceSections, AnswerSet, AxisScoreCalculator, AxisScores, BudgetEstimator, BudgetInputs,
    DiagnosisError, DiagnosisResult, GapAnalyzer, HouseholdProfile, HouseholdSizeEstimator,
    LoanDefaults, RecommendationRanker, ScoreBreakdown, TypeClassifier,
};
use crate::domain::catalog::DiagnosisCatalog;

/// Number of core axes listed as the household's strongest priorities.
pub const TOP_AXES: usize = 3;

/// Separator between size label and value type name in the display name.
pub const DISPLAY_NAME_SEPARATOR: &str = " · ";

/// Whether one or two people answered the value questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosisMode {
    #[default]
    Solo,
    #[serde(alias = "couple")]
    Paired,
}

impl DiagnosisMode {
    pub fn is_paired(&self) -> bool {
        matches!(self, DiagnosisMode::Paired)
    }
}

impl fmt::Display for DiagnosisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosisMode::Solo => write!(f, "solo"),
            DiagnosisMode::Paired => write!(f, "paired"),
        }
    }
}

/// Everything a diagnosis run needs besides the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisInput {
    pub mode: DiagnosisMode,
    pub answers_a: AnswerSet,
    pub answers_b: Option<AnswerSet>,
    pub household: HouseholdProfile,
    pub budget: Option<BudgetInputs>,
}

impl DiagnosisInput {
    /// Solo input with no budget answers.
    pub fn solo(answers: AnswerSet, household: HouseholdProfile) -> Self {
        Self {
            mode: DiagnosisMode::Solo,
            answers_a: answers,
            answers_b: None,
            household,
            budget: None,
        }
    }

    /// Paired input with no budget answers.
    pub fn paired(answers_a: AnswerSet, answers_b: AnswerSet, household: HouseholdProfile) -> Self {
        Self {
            mode: DiagnosisMode::Paired,
            answers_a,
            answers_b: Some(answers_b),
            household,
            budget: None,
        }
    }

    pub fn with_budget(mut self, budget: BudgetInputs) -> Self {
        self.budget = Some(budget);
        self
    }
}

/// Runs diagnoses against one injected catalog.
///
/// The engine borrows the catalog and holds no other state, so one engine
/// can serve any number of concurrent, independent runs.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosisEngine<'a> {
    catalog: &'a DiagnosisCatalog,
    loan_defaults: LoanDefaults,
}

impl<'a> DiagnosisEngine<'a> {
    pub fn new(catalog: &'a DiagnosisCatalog) -> Self {
        Self {
            catalog,
            loan_defaults: LoanDefaults::default(),
        }
    }

    /// Overrides the term and rate used for blank budget answers.
    pub fn with_loan_defaults(mut self, defaults: LoanDefaults) -> Self {
        self.loan_defaults = defaults;
        self
    }

    pub fn catalog(&self) -> &'a DiagnosisCatalog {
        self.catalog
    }

    /// Produces the full report.
    ///
    /// # Edge Cases
    /// - Solo mode ignores `answers_b` even when present
    /// - Paired mode without `answers_b`: [`DiagnosisError::MissingRespondent`]
    /// - Paired mode with no divergent axis: `gaps` is `None`
    /// - No positive monthly capacity: `budget` is `None`
    ///
    /// # Errors
    /// Any catalog miss for the determined value type, size type or a
    /// selected provider category.
    pub fn diagnose(&self, input: &DiagnosisInput) -> Result<DiagnosisResult, DiagnosisError> {
        let questions = &self.catalog.value_questions;

        let scores_a = AxisScoreCalculator::calculate(&input.answers_a, questions);
        let scores_b: Option<AxisScores> = match input.mode {
            DiagnosisMode::Solo => None,
            DiagnosisMode::Paired => {
                let answers_b = input
                    .answers_b
                    .as_ref()
                    .ok_or(DiagnosisError::MissingRespondent)?;
                Some(AxisScoreCalculator::calculate(answers_b, questions))
            }
        };
        let average = match &scores_b {
            Some(b) => scores_a.average(b),
            None => scores_a.clone(),
        };

        let value_type = TypeClassifier::determine(&average);
        let tsubo = HouseholdSizeEstimator::estimate(&input.household);
        let size_type = HouseholdSizeEstimator::classify(tsubo.mid);

        let value_profile = self.catalog.value_type(value_type)?;
        let size_profile = self.catalog.size_type(size_type)?;

        let display_name = format!(
            "{}{}{}",
            size_profile.label, DISPLAY_NAME_SEPARATOR, value_profile.name
        );

        let top_axes = TypeClassifier::rank_core_axes(&average)
            .into_iter()
            .take(TOP_AXES)
            .collect();

        let gaps = scores_b
            .as_ref()
            .map(|b| GapAnalyzer::analyze(&scores_a, b, self.catalog))
            .filter(|gaps| !gaps.is_empty());

        let advice = AdviceSections {
            policy: value_profile.policy_bullets.clone(),
            layout: concat(&value_profile.layout_patterns, &size_profile.layout_overrides),
            budget: value_profile.budget_rules.clone(),
            pitfalls: concat(&value_profile.pitfalls, &size_profile.warnings),
            builder_selection: value_profile.builder_selection_points.clone(),
            next_steps: self.catalog.common_next_steps.clone(),
            disclaimer: self.catalog.disclaimer.clone(),
        };

        let recommendations = RecommendationRanker::rank(&average, self.catalog)?;

        let budget = input
            .budget
            .as_ref()
            .and_then(|inputs| BudgetEstimator::estimate_with(inputs, self.loan_defaults));

        debug!(
            mode = %input.mode,
            value_type = %value_type,
            size_type = %size_type,
            tsubo_mid = tsubo.mid,
            gaps = gaps.as_ref().map(Vec::len).unwrap_or(0),
            recommendations = recommendations.len(),
            budget = budget.is_some(),
            "Diagnosis computed"
        );

        Ok(DiagnosisResult {
            mode: input.mode,
            value_type,
            value_type_name: value_profile.name.clone(),
            summary: value_profile.summary.clone(),
            size_type,
            size_label: size_profile.label.clone(),
            display_name,
            tsubo,
            scores: ScoreBreakdown {
                respondent_a: scores_a,
                respondent_b: scores_b,
                average,
            },
            top_axes,
            gaps,
            advice,
            recommendations,
            budget,
        })
    }
}

fn concat(first: &[String], second: &[String]) -> Vec<String> {
    first.iter().chain(second).cloned().collect()
}
