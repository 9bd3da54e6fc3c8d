//! JSON-lines Consultation Recorder
//!
//! Appends one JSON document per consultation to a log file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::conversation::ConsultationRecord;
use crate::ports::{ConsultationRecorder, RecorderError};

/// Append-only consultation log on disk
#[derive(Debug)]
pub struct JsonLinesConsultationRecorder {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonLinesConsultationRecorder {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConsultationRecorder for JsonLinesConsultationRecorder {
    async fn record(&self, record: &ConsultationRecord) -> Result<(), RecorderError> {
        let mut line = serde_json::to_string(record)
            .map_err(|e| RecorderError::PersistenceFailure(e.to_string()))?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RecorderError::PersistenceFailure(e.to_string()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| RecorderError::PersistenceFailure(e.to_string()))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| RecorderError::PersistenceFailure(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| RecorderError::PersistenceFailure(e.to_string()))?;

        Ok(())
    }
}
