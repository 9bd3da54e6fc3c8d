//! Classification results.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Most likely condition and the classifier's probability for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    condition: String,
    confidence: f64,
}

impl ClassificationResult {
    /// Creates a result, rejecting an empty condition or a confidence
    /// outside `[0, 1]`.
    pub fn new(condition: impl Into<String>, confidence: f64) -> Result<Self, ValidationError> {
        let condition = condition.into().trim().to_string();
        if condition.is_empty() {
            return Err(ValidationError::empty_field("condition"));
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ValidationError::invalid_format(
                "confidence",
                format!("{confidence} is outside [0, 1]"),
            ));
        }
        Ok(Self {
            condition,
            confidence,
        })
    }

    /// Result produced by an in-process model whose labels are non-empty by
    /// construction. The probability is clamped into range.
    pub(super) fn from_model(condition: String, probability: f64) -> Self {
        Self {
            condition,
            confidence: probability.clamp(0.0, 1.0),
        }
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}
