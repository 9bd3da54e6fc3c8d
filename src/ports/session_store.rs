//! Session Store Port - Interface for persisting conversation state.
//!
//! Callers read the state before handing it to the engine and write it back
//! only after a step succeeds. Writes must never be partially visible.

use async_trait::async_trait;

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::SessionId;

/// Errors that can occur during session storage operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for loading and saving per-session conversation state
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the state of a session, `None` if the session has none yet.
    async fn load(&self, session_id: SessionId)
        -> Result<Option<ConversationState>, SessionStoreError>;

    /// Replaces the stored state of a session.
    async fn save(
        &self,
        session_id: SessionId,
        state: &ConversationState,
    ) -> Result<(), SessionStoreError>;

    /// Forgets a session. Deleting an unknown session is not an error.
    async fn delete(&self, session_id: SessionId) -> Result<(), SessionStoreError>;
}
