//! Consultation Adapters
//!
//! Implementations of the ConsultationRecorder port.
//!
//! - **InMemoryConsultationRecorder** - Records kept in memory (testing/development)
//! - **JsonLinesConsultationRecorder** - Append-only JSON-lines log file

mod in_memory_recorder;
mod jsonl_recorder;

pub use in_memory_recorder::InMemoryConsultationRecorder;
pub use jsonl_recorder::JsonLinesConsultationRecorder;
