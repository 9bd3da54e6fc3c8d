//! Classifier Adapters
//!
//! Implementations of the DiseaseClassifier port.
//!
//! - **LocalClassifier** - Naive Bayes model trained in-process from the reference table
//! - **RemoteClassifier** - HTTP client for a separate prediction service

mod local_classifier;
mod remote_classifier;

pub use local_classifier::LocalClassifier;
pub use remote_classifier::{RemoteClassifier, RemoteClassifierConfig};
