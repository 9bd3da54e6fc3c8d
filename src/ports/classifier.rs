//! Disease Classifier Port - Interface for condition prediction.
//!
//! The classifier is stateless after load and may be in-process or remote;
//! the contract is the same either way.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::diagnosis::ClassificationResult;
use crate::domain::symptoms::SymptomSet;

/// Errors a classifier can report
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("No trained model is loaded")]
    ModelUnavailable,

    #[error("Classifier rejected the input: {0}")]
    InvalidInput(String),

    #[error("Classifier transport failed: {0}")]
    Transport(String),

    #[error("Classifier returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Health as reported by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierHealth {
    pub ok: bool,
    pub model_loaded: bool,
}

/// Port for predicting the most likely condition from confirmed symptoms
#[async_trait]
pub trait DiseaseClassifier: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Predicts the most likely condition.
    ///
    /// Symptoms outside the feature schema are ignored.
    ///
    /// # Errors
    /// `ClassifierError::ModelUnavailable` when no trained model is loaded.
    async fn predict(&self, symptoms: &SymptomSet) -> Result<ClassificationResult, ClassifierError>;

    /// Reports whether the classifier is reachable and has a model.
    async fn health(&self) -> Result<ClassifierHealth, ClassifierError>;
}
