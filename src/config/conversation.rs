//! Conversation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::diagnosis::DEFAULT_MAX_CLARIFYING_QUESTIONS;

const MAX_CLARIFYING_LIMIT: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationConfig {
    /// Restart the intake on a greeting at any step
    #[serde(default)]
    pub greeting_resets_mid_flow: bool,

    #[serde(default = "default_max_clarifying_questions")]
    pub max_clarifying_questions: usize,
}

impl ConversationConfig {
    /// Validate conversation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_CLARIFYING_LIMIT).contains(&self.max_clarifying_questions) {
            return Err(ValidationError::InvalidClarifyingLimit);
        }
        Ok(())
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            greeting_resets_mid_flow: false,
            max_clarifying_questions: default_max_clarifying_questions(),
        }
    }
}

fn default_max_clarifying_questions() -> usize {
    DEFAULT_MAX_CLARIFYING_QUESTIONS
}
