//! Canonical symptom identifiers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Canonical symptom identifier as named by the classifier's feature schema
/// (e.g. `high_fever`, `stomach_pain`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomId(String);

/// Accumulated, de-duplicated symptoms. Ordered so replies and records are
/// deterministic.
pub type SymptomSet = BTreeSet<SymptomId>;

impl SymptomId {
    /// Creates a symptom id from a raw schema column name.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ValidationError::empty_field("symptom_id"));
        }
        Ok(Self(id))
    }

    /// Returns the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable form: separators replaced by spaces, lower-cased.
    pub fn display_form(&self) -> String {
        self.0.replace('_', " ").to_lowercase()
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SymptomId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
