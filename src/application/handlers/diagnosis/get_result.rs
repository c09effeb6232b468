//! GetResultHandler - Query handler for a stored diagnosis result.

use std::sync::Arc;

use crate::domain::diagnosis::DiagnosisResult;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::SessionStore;

/// Query for the last result of a session.
#[derive(Debug, Clone)]
pub struct GetResultQuery {
    pub session_id: SessionId,
}

/// Handler for result lookups.
pub struct GetResultHandler {
    store: Arc<dyn SessionStore>,
}

impl GetResultHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetResultQuery) -> Result<DiagnosisResult, DomainError> {
        let session = self.store.load(&query.session_id).await?;
        session.result().cloned().ok_or_else(|| {
            DomainError::new(ErrorCode::ResultNotFound, "Session has no diagnosis result")
                .with_detail("session_id", query.session_id.to_string())
        })
    }
}
