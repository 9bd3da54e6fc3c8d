//! Clarifying-question selection.

use std::sync::Arc;

use super::reference::ReferenceData;
use crate::domain::symptoms::{SymptomId, SymptomSet};

/// Default number of clarifying questions asked per consultation.
pub const DEFAULT_MAX_CLARIFYING_QUESTIONS: usize = 3;

/// Picks follow-up symptoms to ask about for a predicted condition.
#[derive(Debug, Clone)]
pub struct ClarifyingQuestionSelector {
    reference: Arc<ReferenceData>,
    max_questions: usize,
}

impl ClarifyingQuestionSelector {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            reference,
            max_questions: DEFAULT_MAX_CLARIFYING_QUESTIONS,
        }
    }

    /// Overrides the question cap. Zero is raised to one.
    pub fn with_max_questions(mut self, max_questions: usize) -> Self {
        self.max_questions = max_questions.max(1);
        self
    }

    pub fn max_questions(&self) -> usize {
        self.max_questions
    }

    /// Symptoms in the condition's reference profile that are not yet
    /// confirmed, in profile order, at most `max_questions` of them.
    ///
    /// An unknown condition yields no questions.
    pub fn select(&self, condition: &str, confirmed: &SymptomSet) -> Vec<SymptomId> {
        let Some(profile) = self.reference.profile(condition) else {
            return Vec::new();
        };

        profile
            .iter()
            .filter(|id| !confirmed.contains(*id))
            .take(self.max_questions)
            .cloned()
            .collect()
    }
}
