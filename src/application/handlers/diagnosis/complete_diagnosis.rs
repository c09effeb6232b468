//! CompleteDiagnosisHandler - Runs the engine and stores the report.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::catalog::DiagnosisCatalog;
use crate::domain::diagnosis::{BudgetInputs, DiagnosisEngine, DiagnosisResult, LoanDefaults};
use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::SessionStore;

/// Command to finish the questionnaire.
///
/// `budget: None` means the budget step was skipped.
#[derive(Debug, Clone)]
pub struct CompleteDiagnosisCommand {
    pub session_id: SessionId,
    pub budget: Option<BudgetInputs>,
}

/// Handler that produces and persists the diagnosis result.
pub struct CompleteDiagnosisHandler {
    store: Arc<dyn SessionStore>,
    catalog: Arc<DiagnosisCatalog>,
    loan_defaults: LoanDefaults,
}

impl CompleteDiagnosisHandler {
    pub fn new(store: Arc<dyn SessionStore>, catalog: Arc<DiagnosisCatalog>) -> Self {
        Self {
            store,
            catalog,
            loan_defaults: LoanDefaults::default(),
        }
    }

    pub fn with_loan_defaults(mut self, defaults: LoanDefaults) -> Self {
        self.loan_defaults = defaults;
        self
    }

    pub async fn handle(&self, cmd: CompleteDiagnosisCommand) -> Result<DiagnosisResult, DomainError> {
        let mut session = self.store.load(&cmd.session_id).await?;

        session.set_budget(cmd.budget)?;
        let input = session.diagnosis_input()?;

        let engine = DiagnosisEngine::new(&self.catalog).with_loan_defaults(self.loan_defaults);
        let result = engine.diagnose(&input).map_err(|e| {
            warn!(session_id = %cmd.session_id, error = %e, "Diagnosis failed");
            DomainError::from(e)
        })?;

        session.attach_result(result.clone());
        self.store.save(&session).await?;

        info!(
            session_id = %cmd.session_id,
            value_type = %result.value_type,
            size_type = %result.size_type,
            "Diagnosis completed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::domain::diagnosis::{AnswerSet, DiagnosisMode, HouseholdProfile, ValueType};
    use crate::domain::foundation::{ErrorCode, Likert};
    use crate::domain::session::{DiagnosisSession, Respondent};
    use crate::ports::SessionStoreError;
    use async_trait::async_trait;

    fn catalog() -> Arc<DiagnosisCatalog> {
        Arc::new(DiagnosisCatalog::builtin().unwrap())
    }

    fn ready_session(catalog: &DiagnosisCatalog) -> DiagnosisSession {
        let mut session = DiagnosisSession::new(DiagnosisMode::Solo);
        let answers: AnswerSet = catalog
            .value_questions
            .iter()
            .map(|q| (q.id.clone(), Likert::Neutral))
            .collect();
        session.record_answers(Respondent::A, answers).unwrap();
        session.set_household(HouseholdProfile::new(3)).unwrap();
        session
    }

    #[tokio::test]
    async fn stores_result_with_budget() {
        let catalog = catalog();
        let store = Arc::new(InMemorySessionStore::new());
        let session = ready_session(&catalog);
        store.save(&session).await.unwrap();
        let handler = CompleteDiagnosisHandler::new(store.clone(), catalog);

        let result = handler
            .handle(CompleteDiagnosisCommand {
                session_id: *session.id(),
                budget: Some(BudgetInputs::new(90_000).with_down_payment(5_000_000)),
            })
            .await
            .unwrap();

        assert_eq!(result.value_type, ValueType::Balanced);
        let budget = result.budget.as_ref().unwrap();
        assert_eq!(budget.total_budget_approx, budget.loan_max + 5_000_000);

        let stored = store.load(session.id()).await.unwrap();
        assert_eq!(stored.result(), Some(&result));
        assert!(stored.budget().is_some());
    }

    #[tokio::test]
    async fn skipped_budget_yields_no_estimate() {
        let catalog = catalog();
        let store = Arc::new(InMemorySessionStore::new());
        let session = ready_session(&catalog);
        store.save(&session).await.unwrap();
        let handler = CompleteDiagnosisHandler::new(store, catalog);

        let result = handler
            .handle(CompleteDiagnosisCommand {
                session_id: *session.id(),
                budget: None,
            })
            .await
            .unwrap();

        assert!(result.budget.is_none());
    }

    #[tokio::test]
    async fn loan_defaults_flow_into_estimate() {
        let catalog = catalog();
        let store = Arc::new(InMemorySessionStore::new());
        let session = ready_session(&catalog);
        store.save(&session).await.unwrap();
        let handler = CompleteDiagnosisHandler::new(store, catalog).with_loan_defaults(LoanDefaults {
            term_years: 20,
            annual_rate_percent: 0.0,
        });

        let result = handler
            .handle(CompleteDiagnosisCommand {
                session_id: *session.id(),
                budget: Some(BudgetInputs::new(100_000)),
            })
            .await
            .unwrap();

        assert_eq!(result.budget.unwrap().loan_max, 24_000_000);
    }

    #[tokio::test]
    async fn incomplete_session_is_rejected() {
        let catalog = catalog();
        let store = Arc::new(InMemorySessionStore::new());
        let session = DiagnosisSession::new(DiagnosisMode::Paired);
        store.save(&session).await.unwrap();
        let handler = CompleteDiagnosisHandler::new(store.clone(), catalog);

        let err = handler
            .handle(CompleteDiagnosisCommand {
                session_id: *session.id(),
                budget: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::IncompleteSession);
        assert!(store.load(session.id()).await.unwrap().result().is_none());
    }

    #[tokio::test]
    async fn oversized_budget_is_rejected_before_diagnosis() {
        let catalog = catalog();
        let store = Arc::new(InMemorySessionStore::new());
        let session = ready_session(&catalog);
        store.save(&session).await.unwrap();
        let handler = CompleteDiagnosisHandler::new(store.clone(), catalog);

        let err = handler
            .handle(CompleteDiagnosisCommand {
                session_id: *session.id(),
                budget: Some(BudgetInputs::new(i64::MAX / 100).with_down_payment(i64::MAX / 2)),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(store.load(session.id()).await.unwrap().result().is_none());
    }

    #[tokio::test]
    async fn broken_catalog_is_reported() {
        let mut broken = DiagnosisCatalog::builtin().unwrap();
        broken.value_types.clear();
        let store = Arc::new(InMemorySessionStore::new());
        let session = ready_session(&broken);
        store.save(&session).await.unwrap();
        let handler = CompleteDiagnosisHandler::new(store, Arc::new(broken));

        let err = handler
            .handle(CompleteDiagnosisCommand {
                session_id: *session.id(),
                budget: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::CatalogInvalid);
    }

    struct FailingStore {
        inner: InMemorySessionStore,
    }

    #[async_trait]
    impl SessionStore for FailingStore {
        async fn save(&self, _session: &DiagnosisSession) -> Result<(), SessionStoreError> {
            Err(SessionStoreError::IoError("Simulated write failure".to_string()))
        }

        async fn load(&self, id: &SessionId) -> Result<DiagnosisSession, SessionStoreError> {
            self.inner.load(id).await
        }

        async fn exists(&self, id: &SessionId) -> Result<bool, SessionStoreError> {
            self.inner.exists(id).await
        }

        async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn storage_failure_is_surfaced() {
        let catalog = catalog();
        let inner = InMemorySessionStore::new();
        let session = ready_session(&catalog);
        inner.save(&session).await.unwrap();
        let handler = CompleteDiagnosisHandler::new(Arc::new(FailingStore { inner }), catalog);

        let err = handler
            .handle(CompleteDiagnosisCommand {
                session_id: *session.id(),
                budget: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
