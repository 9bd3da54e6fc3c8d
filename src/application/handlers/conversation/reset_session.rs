//! ResetSession command handler.
//!
//! Forgets a session's conversation state so the next message starts the
//! intake from the welcome step. Used for explicit resets and on logout.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Command to reset a session.
#[derive(Debug, Clone, Copy)]
pub struct ResetSessionCommand {
    pub session_id: SessionId,
}

/// Handler for resetting sessions.
pub struct ResetSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl ResetSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: ResetSessionCommand) -> Result<(), SessionStoreError> {
        self.sessions.delete(cmd.session_id).await?;
        info!(session_id = %cmd.session_id, "Session reset");
        Ok(())
    }
}
