//! File-based Session Store Adapter
//!
//! Stores each diagnosis session as one YAML file named after its id.
//! Writes go to a temporary file first and are renamed into place, so a
//! crash mid-write never leaves a truncated session behind.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::foundation::SessionId;
use crate::domain::session::DiagnosisSession;
use crate::ports::{SessionStore, SessionStoreError};

/// File-based storage for diagnosis sessions
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a new file store with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSessionStore::new("./data/sessions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the session file path
    fn session_file_path(&self, id: &SessionId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", id))
    }

    fn temp_file_path(&self, id: &SessionId) -> PathBuf {
        self.base_path.join(format!(".{}.yaml.tmp", id))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, session: &DiagnosisSession) -> Result<(), SessionStoreError> {
        self.ensure_dir().await?;

        let yaml = serde_yaml::to_string(session)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        let temp_path = self.temp_file_path(session.id());
        fs::write(&temp_path, yaml)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        fs::rename(&temp_path, self.session_file_path(session.id()))
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        debug!(session_id = %session.id(), "Session written");
        Ok(())
    }

    async fn load(&self, id: &SessionId) -> Result<DiagnosisSession, SessionStoreError> {
        let file_path = self.session_file_path(id);

        if !fs::try_exists(&file_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?
        {
            return Err(SessionStoreError::NotFound(*id));
        }

        let yaml = fs::read_to_string(&file_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        serde_yaml::from_str(&yaml)
            .map_err(|e| SessionStoreError::DeserializationFailed(e.to_string()))
    }

    async fn exists(&self, id: &SessionId) -> Result<bool, SessionStoreError> {
        fs::try_exists(self.session_file_path(id))
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let file_path = self.session_file_path(id);

        if self.exists(id).await? {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
            debug!(session_id = %id, "Session file removed");
        }

        Ok(())
    }
}
