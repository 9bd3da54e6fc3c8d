//! Per-session conversation state.

use serde::{Deserialize, Serialize};

use super::answers::Gender;
use super::step::IntakeStep;
use crate::domain::symptoms::{SymptomId, SymptomSet};

/// Everything the intake has collected for one session.
///
/// Only the conversation engine changes it; callers load it, hand it to the
/// engine and store what comes back.
///
/// Invariant: `clarify_index <= clarifying_questions.len()`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversationState {
    pub(super) step: IntakeStep,
    pub(super) name: Option<String>,
    pub(super) age: Option<u8>,
    pub(super) gender: Option<Gender>,
    #[serde(default)]
    pub(super) symptoms: SymptomSet,
    pub(super) days: Option<String>,
    pub(super) severity: Option<String>,
    pub(super) preexist: Option<String>,
    pub(super) lifestyle: Option<String>,
    pub(super) family: Option<String>,
    pub(super) predicted_condition: Option<String>,
    pub(super) confidence: Option<f64>,
    #[serde(default)]
    pub(super) clarifying_questions: Vec<SymptomId>,
    #[serde(default)]
    pub(super) clarify_index: usize,
}

impl ConversationState {
    /// Fresh state at the welcome step.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> Option<u8> {
        self.age
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Confirmed symptoms.
    pub fn symptoms(&self) -> &SymptomSet {
        &self.symptoms
    }

    pub fn days(&self) -> Option<&str> {
        self.days.as_deref()
    }

    pub fn severity(&self) -> Option<&str> {
        self.severity.as_deref()
    }

    pub fn preexist(&self) -> Option<&str> {
        self.preexist.as_deref()
    }

    pub fn lifestyle(&self) -> Option<&str> {
        self.lifestyle.as_deref()
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub fn predicted_condition(&self) -> Option<&str> {
        self.predicted_condition.as_deref()
    }

    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }

    pub fn clarifying_questions(&self) -> &[SymptomId] {
        &self.clarifying_questions
    }

    pub fn clarify_index(&self) -> usize {
        self.clarify_index
    }

    /// The clarifying question currently awaiting an answer.
    pub fn pending_question(&self) -> Option<&SymptomId> {
        self.clarifying_questions.get(self.clarify_index)
    }

    /// Starts a new intake, dropping everything collected so far.
    pub(super) fn restart(&mut self) {
        *self = Self {
            step: IntakeStep::Name,
            ..Self::default()
        };
    }

    /// Installs a new question sequence with the cursor at its start.
    pub(super) fn set_clarifying_questions(&mut self, questions: Vec<SymptomId>) {
        self.clarifying_questions = questions;
        self.clarify_index = 0;
    }

    /// Moves the cursor past the pending question, never beyond the end.
    pub(super) fn advance_clarify_cursor(&mut self) {
        self.clarify_index = (self.clarify_index + 1).min(self.clarifying_questions.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> SymptomId {
        SymptomId::new(raw).unwrap()
    }

    #[test]
    fn new_state_starts_at_welcome_with_nothing_collected() {
        let state = ConversationState::new();
        assert_eq!(state.step(), IntakeStep::Welcome);
        assert!(state.symptoms().is_empty());
        assert!(state.pending_question().is_none());
    }

    #[test]
    fn restart_clears_collected_fields() {
        let mut state = ConversationState::new();
        state.name = Some("Alex".to_string());
        state.symptoms.insert(id("headache"));
        state.step = IntakeStep::Duration;

        state.restart();

        assert_eq!(state.step(), IntakeStep::Name);
        assert!(state.name().is_none());
        assert!(state.symptoms().is_empty());
    }

    #[test]
    fn cursor_walks_questions_and_stops_at_end() {
        let mut state = ConversationState::new();
        state.set_clarifying_questions(vec![id("itching"), id("skin_rash")]);

        assert_eq!(state.pending_question(), Some(&id("itching")));
        state.advance_clarify_cursor();
        assert_eq!(state.pending_question(), Some(&id("skin_rash")));
        state.advance_clarify_cursor();
        state.advance_clarify_cursor();

        assert_eq!(state.clarify_index(), 2);
        assert!(state.pending_question().is_none());
    }

    #[test]
    fn round_trips_through_yaml() {
        let mut state = ConversationState::new();
        state.step = IntakeStep::Clarify;
        state.gender = Some(Gender::Female);
        state.symptoms.insert(id("nausea"));
        state.set_clarifying_questions(vec![id("vomiting")]);

        let yaml = serde_yaml::to_string(&state).unwrap();
        let restored: ConversationState = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(restored, state);
    }
}
