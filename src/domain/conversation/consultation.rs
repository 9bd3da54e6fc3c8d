//! Session identity and completed-consultation records.

use serde::{Deserialize, Serialize};

use super::answers::Gender;
use super::state::ConversationState;
use crate::domain::diagnosis::ClassificationResult;
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::symptoms::SymptomId;

const FALLBACK_DISPLAY_NAME: &str = "User";

/// Who is talking, as established by an external authentication layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: Option<UserId>,
    pub username: Option<String>,
}

impl SessionIdentity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: UserId, username: impl Into<String>) -> Self {
        let username = username.into();
        Self {
            user_id: Some(user_id),
            username: Some(username).filter(|u| !u.trim().is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Authenticated username, else the name given in the chat, else "User".
    pub fn display_name<'a>(&'a self, state: &'a ConversationState) -> &'a str {
        self.username
            .as_deref()
            .or_else(|| state.name())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }
}

/// What a finished consultation looked like, for optional storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationRecord {
    pub user_id: Option<UserId>,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub condition: String,
    pub symptoms: Vec<SymptomId>,
    pub severity: Option<String>,
    pub days: Option<String>,
    pub preexist: Option<String>,
    pub lifestyle: Option<String>,
    pub family: Option<String>,
    pub confidence: f64,
    pub recorded_at: Timestamp,
}

impl ConsultationRecord {
    pub(super) fn capture(
        state: &ConversationState,
        identity: &SessionIdentity,
        result: &ClassificationResult,
    ) -> Self {
        Self {
            user_id: identity.user_id.clone(),
            age: state.age(),
            gender: state.gender(),
            condition: result.condition().to_string(),
            symptoms: state.symptoms().iter().cloned().collect(),
            severity: state.severity().map(str::to_string),
            days: state.days().map(str::to_string),
            preexist: state.preexist().map(str::to_string),
            lifestyle: state.lifestyle().map(str::to_string),
            family: state.family().map(str::to_string),
            confidence: result.confidence(),
            recorded_at: Timestamp::now(),
        }
    }

    /// True when the record belongs to an authenticated user.
    pub fn has_identity(&self) -> bool {
        self.user_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_username_then_chat_name() {
        let mut state = ConversationState::new();
        state.name = Some("Alex".to_string());

        let signed_in = SessionIdentity::authenticated(UserId::new("u-1").unwrap(), "alexj");
        assert_eq!(signed_in.display_name(&state), "alexj");
        assert_eq!(SessionIdentity::anonymous().display_name(&state), "Alex");
        assert_eq!(
            SessionIdentity::anonymous().display_name(&ConversationState::new()),
            "User"
        );
    }

    #[test]
    fn blank_username_is_dropped() {
        let identity = SessionIdentity::authenticated(UserId::new("u-1").unwrap(), "  ");
        assert!(identity.is_authenticated());
        assert!(identity.username.is_none());
    }

    #[test]
    fn capture_copies_collected_fields() {
        let mut state = ConversationState::new();
        state.age = Some(30);
        state.days = Some("3 days".to_string());
        state.symptoms.insert(SymptomId::new("headache").unwrap());
        let result = ClassificationResult::new("Migraine", 0.7).unwrap();

        let record = ConsultationRecord::capture(&state, &SessionIdentity::anonymous(), &result);

        assert_eq!(record.condition, "Migraine");
        assert_eq!(record.age, Some(30));
        assert_eq!(record.days.as_deref(), Some("3 days"));
        assert_eq!(record.symptoms.len(), 1);
        assert!(!record.has_identity());
    }
}
