//! Symptom matching configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::symptoms::{MatcherStrategy, DEFAULT_MATCH_THRESHOLD, DEFAULT_MAX_CANDIDATES};

/// Approximate matcher settings
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub strategy: MatcherStrategy,

    /// Minimum similarity on the 0-1 scale
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Hits kept per utterance by the ratio backend
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl MatchingConfig {
    /// Validate matching configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(ValidationError::InvalidThreshold);
        }
        if self.max_candidates == 0 {
            return Err(ValidationError::InvalidCandidateLimit);
        }
        Ok(())
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            strategy: MatcherStrategy::default(),
            threshold: default_threshold(),
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}
