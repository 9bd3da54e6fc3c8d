//! Domain layer containing the intake logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, errors, state machine trait)
//! - `symptoms` - Symptom ids, phrase lexicon, approximate matching, extraction
//! - `diagnosis` - Feature schema, reference data, naive Bayes model, clarifying questions
//! - `knowledge` - Condition descriptions, precautions, severity weights
//! - `conversation` - Intake steps, session state, engine, final report

pub mod conversation;
pub mod diagnosis;
pub mod foundation;
pub mod knowledge;
pub mod symptoms;
