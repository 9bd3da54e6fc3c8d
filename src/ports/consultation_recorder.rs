//! Consultation Recorder Port - Interface for storing finished consultations.

use async_trait::async_trait;

use crate::domain::conversation::ConsultationRecord;

/// Errors that can occur while recording a consultation
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("Failed to persist consultation: {0}")]
    PersistenceFailure(String),
}

/// Port for storing consultation records.
///
/// Recording is best-effort: a failure is reported to the caller, which must
/// not let it block the reply to the user.
#[async_trait]
pub trait ConsultationRecorder: Send + Sync {
    async fn record(&self, record: &ConsultationRecord) -> Result<(), RecorderError>;
}
