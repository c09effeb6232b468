//! Diagnosis session aggregate.
//!
//! A session holds everything the questionnaire collects between the first
//! answer and the report: the mode, each respondent's answers, the household
//! profile, optional budget answers, and the last computed result.
//!
//! # Invalidation
//!
//! Any change to an input clears the stored result, so a stored result
//! always matches the current inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::DiagnosisCatalog;
use crate::domain::diagnosis::{
    AnswerSet, BudgetInputs, DiagnosisInput, DiagnosisMode, DiagnosisResult, HouseholdProfile,
};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};

/// Which person an answer set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Respondent {
    A,
    B,
}

impl fmt::Display for Respondent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Respondent::A => write!(f, "a"),
            Respondent::B => write!(f, "b"),
        }
    }
}

/// Session aggregate for one household's questionnaire.
///
/// # Invariants
///
/// - Solo sessions never hold respondent B answers
/// - `result`, when present, was computed from the current inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisSession {
    id: SessionId,
    mode: DiagnosisMode,
    answers_a: AnswerSet,
    #[serde(default)]
    answers_b: Option<AnswerSet>,
    #[serde(default)]
    household: Option<HouseholdProfile>,
    #[serde(default)]
    budget: Option<BudgetInputs>,
    #[serde(default)]
    result: Option<DiagnosisResult>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DiagnosisSession {
    /// Starts an empty session.
    pub fn new(mode: DiagnosisMode) -> Self {
        Self::with_id(SessionId::new(), mode)
    }

    /// Starts an empty session with a caller-chosen id.
    pub fn with_id(id: SessionId, mode: DiagnosisMode) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            mode,
            answers_a: AnswerSet::new(),
            answers_b: None,
            household: None,
            budget: None,
            result: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn mode(&self) -> DiagnosisMode {
        self.mode
    }

    /// Returns the answers of one respondent, if any were recorded.
    pub fn answers(&self, respondent: Respondent) -> Option<&AnswerSet> {
        match respondent {
            Respondent::A => Some(&self.answers_a),
            Respondent::B => self.answers_b.as_ref(),
        }
    }

    pub fn household(&self) -> Option<&HouseholdProfile> {
        self.household.as_ref()
    }

    pub fn budget(&self) -> Option<&BudgetInputs> {
        self.budget.as_ref()
    }

    pub fn result(&self) -> Option<&DiagnosisResult> {
        self.result.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Counts answers of one respondent that match a catalog question.
    pub fn answered_count(&self, respondent: Respondent, catalog: &DiagnosisCatalog) -> usize {
        self.answers(respondent)
            .map(|answers| {
                answers
                    .iter()
                    .filter(|(id, _)| catalog.question(id).is_some())
                    .count()
            })
            .unwrap_or(0)
    }

    /// Returns true when the respondent answered every catalog question.
    pub fn is_questionnaire_complete(
        &self,
        respondent: Respondent,
        catalog: &DiagnosisCatalog,
    ) -> bool {
        self.answered_count(respondent, catalog) == catalog.value_questions.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Switches between solo and paired. Switching to solo drops respondent B.
    pub fn change_mode(&mut self, mode: DiagnosisMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        if mode == DiagnosisMode::Solo {
            self.answers_b = None;
        }
        self.touch();
    }

    /// Merges answers into one respondent's set.
    ///
    /// # Errors
    ///
    /// - `RespondentNotExpected` for respondent B in a solo session
    pub fn record_answers(
        &mut self,
        respondent: Respondent,
        answers: AnswerSet,
    ) -> Result<(), DomainError> {
        match respondent {
            Respondent::A => self.answers_a.merge(answers),
            Respondent::B => {
                if !self.mode.is_paired() {
                    return Err(DomainError::new(
                        ErrorCode::RespondentNotExpected,
                        "Respondent B cannot answer in a solo session",
                    ));
                }
                self.answers_b.get_or_insert_with(AnswerSet::new).merge(answers);
            }
        }
        self.touch();
        Ok(())
    }

    /// Stores the household profile.
    ///
    /// # Errors
    ///
    /// - Validation errors from [`HouseholdProfile::validate`]
    pub fn set_household(&mut self, profile: HouseholdProfile) -> Result<(), DomainError> {
        profile.validate()?;
        self.household = Some(profile);
        self.touch();
        Ok(())
    }

    /// Stores budget answers; `None` records that the step was skipped.
    ///
    /// # Errors
    ///
    /// - Validation errors from [`BudgetInputs::validate`]
    pub fn set_budget(&mut self, budget: Option<BudgetInputs>) -> Result<(), DomainError> {
        if let Some(inputs) = &budget {
            inputs.validate()?;
        }
        self.budget = budget;
        self.touch();
        Ok(())
    }

    /// Builds the engine input from the collected answers.
    ///
    /// # Errors
    ///
    /// - `IncompleteSession` if the household profile is missing
    /// - `IncompleteSession` if a paired session has no respondent B answers
    pub fn diagnosis_input(&self) -> Result<DiagnosisInput, DomainError> {
        let household = self.household.clone().ok_or_else(|| {
            DomainError::new(
                ErrorCode::IncompleteSession,
                "Household profile has not been submitted",
            )
            .with_detail("session_id", self.id.to_string())
        })?;

        let answers_b = match self.mode {
            DiagnosisMode::Solo => None,
            DiagnosisMode::Paired => {
                let answers = self
                    .answers_b
                    .clone()
                    .filter(|answers| !answers.is_empty())
                    .ok_or_else(|| {
                        DomainError::new(
                            ErrorCode::IncompleteSession,
                            "Paired session is missing respondent B answers",
                        )
                        .with_detail("session_id", self.id.to_string())
                    })?;
                Some(answers)
            }
        };

        Ok(DiagnosisInput {
            mode: self.mode,
            answers_a: self.answers_a.clone(),
            answers_b,
            household,
            budget: self.budget.clone(),
        })
    }

    /// Stores a freshly computed result.
    pub fn attach_result(&mut self, result: DiagnosisResult) {
        self.result = Some(result);
        self.updated_at = Timestamp::now();
    }

    fn touch(&mut self) {
        self.result = None;
        self.updated_at = Timestamp::now();
    }
}
