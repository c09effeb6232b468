//! ClearSessionHandler - Command handler for discarding a session.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, SessionId};
use crate::ports::SessionStore;

/// Command to discard all data of a session.
#[derive(Debug, Clone)]
pub struct ClearSessionCommand {
    pub session_id: SessionId,
}

/// Handler for clearing sessions. Clearing an unknown session succeeds.
pub struct ClearSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl ClearSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ClearSessionCommand) -> Result<(), DomainError> {
        self.store.delete(&cmd.session_id).await?;
        info!(session_id = %cmd.session_id, "Session cleared");
        Ok(())
    }
}
