//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where session state lives
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for session files (file backend)
    #[serde(default = "default_session_dir")]
    pub session_dir: PathBuf,

    /// JSON-lines consultation log; kept in memory when unset
    pub consultation_log: Option<PathBuf>,

    /// Also record consultations of anonymous sessions
    #[serde(default)]
    pub record_anonymous: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            session_dir: default_session_dir(),
            consultation_log: None,
            record_anonymous: false,
        }
    }
}

fn default_session_dir() -> PathBuf {
    PathBuf::from("sessions")
}
