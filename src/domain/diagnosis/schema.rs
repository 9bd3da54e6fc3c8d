//! Feature schema: the classifier's fixed, ordered list of symptom ids.

use std::collections::HashMap;

use crate::domain::symptoms::SymptomId;

/// Ordered canonical symptom ids. Slot `i` of every feature vector refers to
/// `ids()[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomSchema {
    ids: Vec<SymptomId>,
    index: HashMap<SymptomId, usize>,
}

impl SymptomSchema {
    /// Creates a schema. Repeated ids keep their first position.
    pub fn new(ids: impl IntoIterator<Item = SymptomId>) -> Self {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();
        for id in ids {
            if index.contains_key(&id) {
                continue;
            }
            index.insert(id.clone(), ordered.len());
            ordered.push(id);
        }
        Self {
            ids: ordered,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in feature order.
    pub fn ids(&self) -> &[SymptomId] {
        &self.ids
    }

    /// Feature slot of an id, if the schema knows it.
    pub fn position(&self, id: &SymptomId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &SymptomId) -> bool {
        self.index.contains_key(id)
    }
}
