//! Symptom Intake - Conversational symptom intake assistant
//!
//! This crate walks a user through a fixed intake interview, extracts
//! canonical symptoms from free text, predicts a likely condition with a
//! classifier, asks clarifying questions drawn from reference profiles and
//! renders a final report with condition knowledge.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
