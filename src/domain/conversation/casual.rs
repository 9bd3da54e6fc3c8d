//! Canned replies to small talk outside the intake flow.
//!
//! Only consulted before the intake starts and after the report, so answers
//! like "yes, thank you" still reach the intake questions.

const FAREWELLS: &[&str] = &["bye", "goodbye", "see you", "take care", "farewell", "later"];
const THANKS: &[&str] = &["thank you", "thanks", "thx", "thank you very much"];

/// Small talk answered without running the intake state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasualReply {
    Farewell,
    Thanks,
}

impl CasualReply {
    /// Detects farewells first, then thanks, as substrings of the
    /// lower-cased text.
    pub fn detect(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if FAREWELLS.iter().any(|f| lower.contains(f)) {
            Some(Self::Farewell)
        } else if THANKS.iter().any(|t| lower.contains(t)) {
            Some(Self::Thanks)
        } else {
            None
        }
    }

    pub fn reply(&self) -> &'static str {
        match self {
            Self::Farewell => "Goodbye! Take care and stay healthy!",
            Self::Thanks => "You're welcome! Feel free to reach out anytime.",
        }
    }
}
