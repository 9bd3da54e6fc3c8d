//! Knowledge base module.
//!
//! Static condition descriptions, condition precautions and symptom severity
//! weights. Loaded once at start-up and read-only after.

mod knowledge_base;

pub use knowledge_base::{KnowledgeBase, MAX_PRECAUTIONS};
