//! Diagnosis domain module.
//!
//! Feature schema and vectors, reference training data, the in-process
//! naive Bayes model and clarifying-question selection.

mod clarifying;
mod classification;
mod feature_vector;
mod naive_bayes;
mod reference;
mod schema;

pub use clarifying::{ClarifyingQuestionSelector, DEFAULT_MAX_CLARIFYING_QUESTIONS};
pub use classification::ClassificationResult;
pub use feature_vector::FeatureVector;
pub use naive_bayes::NaiveBayesModel;
pub use reference::{LabelledRow, ReferenceData};
pub use schema::SymptomSchema;
