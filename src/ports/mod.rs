//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DiseaseClassifier` - Condition prediction, in-process or remote
//! - `SessionStore` - Per-session conversation state
//! - `ConsultationRecorder` - Best-effort storage of finished consultations

mod classifier;
mod consultation_recorder;
mod session_store;

pub use classifier::{ClassifierError, ClassifierHealth, DiseaseClassifier};
pub use consultation_recorder::{ConsultationRecorder, RecorderError};
pub use session_store::{SessionStore, SessionStoreError};
