//! File-based Session Store Adapter
//!
//! Stores each session's conversation state as one YAML document on disk.
//! Writes go to a temporary file that is then renamed over the target, so a
//! reader never sees a half-written state.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// File-based storage for session state
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSessionStore::new("./sessions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn state_file_path(&self, session_id: SessionId) -> PathBuf {
        self.base_path.join(format!("{session_id}.yaml"))
    }

    fn temp_file_path(&self, session_id: SessionId) -> PathBuf {
        self.base_path.join(format!(".{session_id}.yaml.tmp"))
    }

    async fn ensure_dir(&self) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(
        &self,
        session_id: SessionId,
    ) -> Result<Option<ConversationState>, SessionStoreError> {
        let file_path = self.state_file_path(session_id);

        let yaml = match fs::read_to_string(&file_path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionStoreError::IoError(e.to_string())),
        };

        let state = serde_yaml::from_str(&yaml)
            .map_err(|e| SessionStoreError::DeserializationFailed(e.to_string()))?;

        Ok(Some(state))
    }

    async fn save(
        &self,
        session_id: SessionId,
        state: &ConversationState,
    ) -> Result<(), SessionStoreError> {
        self.ensure_dir().await?;

        let yaml = serde_yaml::to_string(state)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        let temp_path = self.temp_file_path(session_id);
        fs::write(&temp_path, yaml)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        fs::rename(&temp_path, self.state_file_path(session_id))
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, session_id: SessionId) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.state_file_path(session_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::IoError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_state() -> ConversationState {
        serde_yaml::from_str(
            "step: gender\nname: Alex\nage: 30\nsymptoms: [headache, nausea]\n",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_file_store_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let session_id = SessionId::new();
        let state = test_state();

        store.save(session_id, &state).await.unwrap();
        let loaded = store.load(session_id).await.unwrap();

        assert_eq!(loaded, Some(state));
    }

    #[tokio::test]
    async fn test_file_store_load_unknown_session() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());

        assert_eq!(store.load(SessionId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("nested/sessions"));
        let session_id = SessionId::new();

        store.save(session_id, &test_state()).await.unwrap();

        assert!(store.load(session_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_file_store_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let session_id = SessionId::new();

        store.save(session_id, &test_state()).await.unwrap();

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec![format!("{session_id}.yaml")]);
    }

    #[tokio::test]
    async fn test_file_store_overwrites_previous_state() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let session_id = SessionId::new();

        store.save(session_id, &test_state()).await.unwrap();
        store.save(session_id, &ConversationState::new()).await.unwrap();

        assert_eq!(
            store.load(session_id).await.unwrap(),
            Some(ConversationState::new())
        );
    }

    #[tokio::test]
    async fn test_file_store_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let session_id = SessionId::new();

        store.save(session_id, &test_state()).await.unwrap();
        store.delete(session_id).await.unwrap();

        assert_eq!(store.load(session_id).await.unwrap(), None);
        // deleting again is fine
        store.delete(session_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_rejects_corrupt_document() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path());
        let session_id = SessionId::new();
        std::fs::write(store.state_file_path(session_id), "step: [unclosed").unwrap();

        let result = store.load(session_id).await;

        assert!(matches!(result, Err(SessionStoreError::DeserializationFailed(_))));
    }
}
