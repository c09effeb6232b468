//! Session Store Port - Interface for persisting questionnaire sessions.
//!
//! Sessions are read once when an interaction starts and written once when
//! it ends, so the contract is a plain key-value store keyed by session id.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::DiagnosisSession;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Failed to serialize session: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<SessionStoreError> for DomainError {
    fn from(err: SessionStoreError) -> Self {
        match &err {
            SessionStoreError::NotFound(id) => {
                DomainError::new(ErrorCode::SessionNotFound, err.to_string())
                    .with_detail("session_id", id.to_string())
            }
            _ => DomainError::new(ErrorCode::StorageError, err.to_string()),
        }
    }
}

/// Port for persisting and loading diagnosis sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Save a session, replacing any previous version
    ///
    /// # Errors
    /// Returns `SessionStoreError` if save fails
    async fn save(&self, session: &DiagnosisSession) -> Result<(), SessionStoreError>;

    /// Load a session
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session exists
    async fn load(&self, id: &SessionId) -> Result<DiagnosisSession, SessionStoreError>;

    /// Check if a session exists
    async fn exists(&self, id: &SessionId) -> Result<bool, SessionStoreError>;

    /// Delete a session. Deleting a missing session is not an error.
    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_session_not_found() {
        let id = SessionId::new();
        let err: DomainError = SessionStoreError::NotFound(id).into();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
        assert_eq!(err.details.get("session_id"), Some(&id.to_string()));
    }

    #[test]
    fn io_errors_map_to_storage_error() {
        let err: DomainError = SessionStoreError::IoError("disk full".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("disk full"));
    }

    #[test]
    fn serialization_error_message() {
        let err = SessionStoreError::SerializationFailed("bad yaml".to_string());
        assert!(err.to_string().contains("serialize"));
    }
}
