//! SubmitAnswersHandler - Command handler for recording Likert answers.

use std::sync::Arc;
use tracing::debug;

use crate::domain::catalog::DiagnosisCatalog;
use crate::domain::diagnosis::{AnswerSet, DiagnosisMode};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Respondent;
use crate::ports::SessionStore;

/// Command to record answers for one respondent.
///
/// `mode`, when set, switches the session mode before the answers are
/// recorded (the questionnaire lets users change it at any time).
#[derive(Debug, Clone)]
pub struct SubmitAnswersCommand {
    pub session_id: SessionId,
    pub respondent: Respondent,
    pub answers: AnswerSet,
    pub mode: Option<DiagnosisMode>,
}

/// Progress after recording answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAnswersResult {
    pub answered: usize,
    pub total: usize,
}

impl SubmitAnswersResult {
    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }
}

/// Handler for recording answers.
pub struct SubmitAnswersHandler {
    store: Arc<dyn SessionStore>,
    catalog: Arc<DiagnosisCatalog>,
}

impl SubmitAnswersHandler {
    pub fn new(store: Arc<dyn SessionStore>, catalog: Arc<DiagnosisCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, cmd: SubmitAnswersCommand) -> Result<SubmitAnswersResult, DomainError> {
        let mut session = self.store.load(&cmd.session_id).await?;

        if let Some(mode) = cmd.mode {
            session.change_mode(mode);
        }
        session.record_answers(cmd.respondent, cmd.answers)?;
        self.store.save(&session).await?;

        let result = SubmitAnswersResult {
            answered: session.answered_count(cmd.respondent, &self.catalog),
            total: self.catalog.value_questions.len(),
        };
        debug!(
            session_id = %cmd.session_id,
            respondent = %cmd.respondent,
            answered = result.answered,
            total = result.total,
            "Answers recorded"
        );
        Ok(result)
    }
}
