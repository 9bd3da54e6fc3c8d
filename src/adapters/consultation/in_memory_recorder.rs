//! In-Memory Consultation Recorder
//!
//! Keeps recorded consultations in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ConsultationRecord;
use crate::ports::{ConsultationRecorder, RecorderError};

/// In-memory consultation log
#[derive(Debug, Clone, Default)]
pub struct InMemoryConsultationRecorder {
    records: Arc<RwLock<Vec<ConsultationRecord>>>,
}

impl InMemoryConsultationRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records so far, oldest first
    pub async fn records(&self) -> Vec<ConsultationRecord> {
        self.records.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ConsultationRecorder for InMemoryConsultationRecorder {
    async fn record(&self, record: &ConsultationRecord) -> Result<(), RecorderError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }
}
