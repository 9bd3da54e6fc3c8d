//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `classifier` - Local naive Bayes model and remote prediction service
//! - `consultation` - Consultation record sinks (in-memory, JSON lines)
//! - `data` - CSV loaders for the training table and condition knowledge
//! - `storage` - Conversation state stores (in-memory, YAML files)

pub mod classifier;
pub mod consultation;
pub mod data;
pub mod storage;

pub use classifier::{LocalClassifier, RemoteClassifier, RemoteClassifierConfig};
pub use consultation::{InMemoryConsultationRecorder, JsonLinesConsultationRecorder};
pub use data::{DataLoadError, KnowledgeFiles};
pub use storage::{FileSessionStore, InMemorySessionStore};
