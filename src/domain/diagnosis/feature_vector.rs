//! Symptom-presence feature vectors.

use std::collections::BTreeMap;

use super::schema::SymptomSchema;
use crate::domain::symptoms::SymptomSet;

/// Fixed-length 0/1 vector in schema order. Built per classification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector(Vec<u8>);

impl FeatureVector {
    /// Sets slot `i` for every symptom the schema knows. Unknown ids are
    /// ignored.
    pub fn from_symptoms(schema: &SymptomSchema, symptoms: &SymptomSet) -> Self {
        let mut slots = vec![0u8; schema.len()];
        for symptom in symptoms {
            if let Some(i) = schema.position(symptom) {
                slots[i] = 1;
            }
        }
        Self(slots)
    }

    /// Wraps raw flags. Any non-zero value counts as present.
    pub fn from_flags(flags: Vec<u8>) -> Self {
        Self(flags.into_iter().map(|f| u8::from(f != 0)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_set(&self, slot: usize) -> bool {
        self.0.get(slot).copied() == Some(1)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of slots set to 1.
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|f| **f == 1).count()
    }

    /// Id -> flag mapping covering every schema id, as sent over the wire.
    pub fn to_flags(&self, schema: &SymptomSchema) -> BTreeMap<String, u8> {
        schema
            .ids()
            .iter()
            .zip(self.0.iter())
            .map(|(id, flag)| (id.as_str().to_string(), *flag))
            .collect()
    }
}
