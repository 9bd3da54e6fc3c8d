//! Conversation domain module.
//!
//! The intake dialogue: steps, per-session state, answer parsing, the engine
//! that drives a step, and the final report.

mod answers;
mod casual;
mod consultation;
mod engine;
mod replies;
mod report;
mod state;
mod step;

pub use answers::{contains_greeting, is_affirmative, parse_age, Gender, GREETINGS, MAX_AGE, MIN_AGE};
pub use casual::CasualReply;
pub use consultation::{ConsultationRecord, SessionIdentity};
pub use engine::{ConversationEngine, ConversationEngineConfig, EngineError, StepOutcome};
pub use replies::ASSISTANT_NAME;
pub use report::{FinalReport, DEFAULT_DESCRIPTION, DISCLAIMER, REGISTRATION_PROMPT};
pub use state::ConversationState;
pub use step::IntakeStep;
