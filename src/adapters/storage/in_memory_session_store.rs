//! In-Memory Session Store Adapter
//!
//! Keeps conversation state in memory. Useful for testing, development and
//! the single-user console.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for session state
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    states: Arc<RwLock<HashMap<SessionId, ConversationState>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.states.read().await.len()
    }

    /// Clear all stored sessions (useful for tests)
    pub async fn clear(&self) {
        self.states.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(
        &self,
        session_id: SessionId,
    ) -> Result<Option<ConversationState>, SessionStoreError> {
        Ok(self.states.read().await.get(&session_id).cloned())
    }

    async fn save(
        &self,
        session_id: SessionId,
        state: &ConversationState,
    ) -> Result<(), SessionStoreError> {
        self.states.write().await.insert(session_id, state.clone());
        Ok(())
    }

    async fn delete(&self, session_id: SessionId) -> Result<(), SessionStoreError> {
        self.states.write().await.remove(&session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_save_and_load() {
        let store = InMemorySessionStore::new();
        let session_id = SessionId::new();
        let state = ConversationState::new();

        store.save(session_id, &state).await.unwrap();

        assert_eq!(store.load(session_id).await.unwrap(), Some(state));
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_in_memory_sessions_are_independent() {
        let store = InMemorySessionStore::new();
        let first = SessionId::new();
        let second = SessionId::new();

        store.save(first, &ConversationState::new()).await.unwrap();

        assert!(store.load(second).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_delete_and_clear() {
        let store = InMemorySessionStore::new();
        let session_id = SessionId::new();
        store.save(session_id, &ConversationState::new()).await.unwrap();
        store.save(SessionId::new(), &ConversationState::new()).await.unwrap();

        store.delete(session_id).await.unwrap();
        assert!(store.load(session_id).await.unwrap().is_none());
        assert_eq!(store.session_count().await, 1);

        store.clear().await;
        assert_eq!(store.session_count().await, 0);
    }
}
