//! SendMessage command handler.
//!
//! Runs one user message through the intake engine for a session and keeps
//! the session state and consultation log up to date.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::conversation::{
    CasualReply, ConversationEngine, EngineError, IntakeStep, SessionIdentity,
};
use crate::domain::foundation::{ErrorCode, SessionId};
use crate::ports::{ConsultationRecorder, SessionStore, SessionStoreError};

/// Reply for a message with no content.
pub const EMPTY_MESSAGE_REPLY: &str = "Please enter a message.";

/// Command to send a message in a session.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub session_id: SessionId,
    pub identity: SessionIdentity,
    pub message: String,
}

impl SendMessageCommand {
    pub fn new(session_id: SessionId, identity: SessionIdentity, message: impl Into<String>) -> Self {
        Self {
            session_id,
            identity,
            message: message.into(),
        }
    }
}

/// Errors that can occur when sending a message. The stored state is left
/// as it was.
#[derive(Debug, Clone, Error)]
pub enum SendMessageError {
    /// The classifier has no trained model.
    #[error("Model unavailable")]
    ModelUnavailable,

    /// The classifier failed for another reason.
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Session state could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The engine attempted a step change it does not allow.
    #[error("Invalid step transition: {0}")]
    InvalidTransition(String),
}

impl SendMessageError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SendMessageError::ModelUnavailable => ErrorCode::ModelUnavailable,
            SendMessageError::Classifier(_) => ErrorCode::ClassifierError,
            SendMessageError::Storage(_) => ErrorCode::PersistenceFailed,
            SendMessageError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<EngineError> for SendMessageError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ModelUnavailable => SendMessageError::ModelUnavailable,
            EngineError::Classifier(e) => SendMessageError::Classifier(e.to_string()),
            EngineError::InvalidTransition(e) => SendMessageError::InvalidTransition(e.to_string()),
        }
    }
}

impl From<SessionStoreError> for SendMessageError {
    fn from(err: SessionStoreError) -> Self {
        SendMessageError::Storage(err.to_string())
    }
}

/// Result of sending a message.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    /// Assistant reply to show the user.
    pub reply: String,
    /// Step the session is at after this message.
    pub step: IntakeStep,
    /// True when a consultation was written to the log.
    pub consultation_recorded: bool,
}

/// Behavioural switches for the handler.
#[derive(Debug, Clone, Default)]
pub struct SendMessageConfig {
    /// Record consultations of sessions without an authenticated identity.
    pub record_anonymous: bool,
}

/// Handler for SendMessage commands.
pub struct SendMessageHandler {
    engine: Arc<ConversationEngine>,
    sessions: Arc<dyn SessionStore>,
    recorder: Arc<dyn ConsultationRecorder>,
    config: SendMessageConfig,
}

impl SendMessageHandler {
    pub fn new(
        engine: Arc<ConversationEngine>,
        sessions: Arc<dyn SessionStore>,
        recorder: Arc<dyn ConsultationRecorder>,
    ) -> Self {
        Self {
            engine,
            sessions,
            recorder,
            config: SendMessageConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SendMessageConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn handle(
        &self,
        cmd: SendMessageCommand,
    ) -> Result<SendMessageResult, SendMessageError> {
        // 1. Load state, fresh if the session is new
        let state = self
            .sessions
            .load(cmd.session_id)
            .await?
            .unwrap_or_default();

        // 2. Empty messages never reach the engine
        if cmd.message.trim().is_empty() {
            return Ok(SendMessageResult {
                reply: EMPTY_MESSAGE_REPLY.to_string(),
                step: state.step(),
                consultation_recorded: false,
            });
        }

        // 3. Small talk only outside the intake questions
        if matches!(state.step(), IntakeStep::Welcome | IntakeStep::Final) {
            if let Some(casual) = CasualReply::detect(&cmd.message) {
                debug!(session_id = %cmd.session_id, ?casual, "Casual reply");
                return Ok(SendMessageResult {
                    reply: casual.reply().to_string(),
                    step: state.step(),
                    consultation_recorded: false,
                });
            }
        }

        // 4. Step
        let outcome = self
            .engine
            .step(&state, &cmd.message, &cmd.identity)
            .await
            .map_err(|e| {
                warn!(session_id = %cmd.session_id, error = %e, "Intake step failed");
                SendMessageError::from(e)
            })?;

        // 5. Persist only after success
        self.sessions.save(cmd.session_id, &outcome.state).await?;

        debug!(
            session_id = %cmd.session_id,
            from = %state.step(),
            to = %outcome.state.step(),
            "Session advanced"
        );

        // 6. Record, never blocking the reply
        let mut consultation_recorded = false;
        if let Some(record) = &outcome.consultation {
            info!(
                session_id = %cmd.session_id,
                condition = %record.condition,
                confidence = record.confidence,
                "Consultation completed"
            );

            if cmd.identity.is_authenticated() || self.config.record_anonymous {
                match self.recorder.record(record).await {
                    Ok(()) => consultation_recorded = true,
                    Err(e) => {
                        warn!(session_id = %cmd.session_id, error = %e, "Failed to record consultation");
                    }
                }
            }
        }

        Ok(SendMessageResult {
            reply: outcome.reply,
            step: outcome.state.step(),
            consultation_recorded,
        })
    }
}
