//! StartSessionHandler - Command handler for starting a questionnaire.

use std::sync::Arc;
use tracing::info;

use crate::domain::diagnosis::DiagnosisMode;
use crate::domain::foundation::DomainError;
use crate::domain::session::DiagnosisSession;
use crate::ports::SessionStore;

/// Command to start a new session.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub mode: DiagnosisMode,
}

/// Result of starting a session.
#[derive(Debug, Clone)]
pub struct StartSessionResult {
    pub session: DiagnosisSession,
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<StartSessionResult, DomainError> {
        let session = DiagnosisSession::new(cmd.mode);
        self.store.save(&session).await?;

        info!(session_id = %session.id(), mode = %cmd.mode, "Session started");
        Ok(StartSessionResult { session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;

    #[tokio::test]
    async fn start_persists_empty_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartSessionHandler::new(store.clone());

        let result = handler
            .handle(StartSessionCommand {
                mode: DiagnosisMode::Paired,
            })
            .await
            .unwrap();

        let stored = store.load(result.session.id()).await.unwrap();
        assert_eq!(stored.mode(), DiagnosisMode::Paired);
        assert!(stored.result().is_none());
    }

    #[tokio::test]
    async fn each_start_creates_a_new_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let handler = StartSessionHandler::new(store.clone());
        let cmd = StartSessionCommand {
            mode: DiagnosisMode::Solo,
        };

        let first = handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_ne!(first.session.id(), second.session.id());
        assert_eq!(store.session_count().await, 2);
    }
}
