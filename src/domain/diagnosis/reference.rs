//! Labelled reference data the classifier is trained on.

use std::collections::BTreeMap;

use super::feature_vector::FeatureVector;
use super::schema::SymptomSchema;
use crate::domain::symptoms::SymptomId;

/// One labelled training row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledRow {
    pub features: FeatureVector,
    pub condition: String,
}

/// Training table: schema, rows and the reference profile of each condition.
///
/// A condition's profile is the set of symptoms present in its FIRST row,
/// kept in schema column order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    schema: SymptomSchema,
    rows: Vec<LabelledRow>,
    profiles: BTreeMap<String, Vec<SymptomId>>,
}

impl ReferenceData {
    /// Builds reference data. Rows whose width differs from the schema are
    /// expected to be filtered out by the caller; any that slip through are
    /// dropped here.
    pub fn new(schema: SymptomSchema, rows: Vec<LabelledRow>) -> Self {
        let rows: Vec<LabelledRow> = rows
            .into_iter()
            .filter(|row| row.features.len() == schema.len())
            .collect();

        let mut profiles = BTreeMap::new();
        for row in &rows {
            profiles.entry(row.condition.clone()).or_insert_with(|| {
                schema
                    .ids()
                    .iter()
                    .enumerate()
                    .filter(|(slot, _)| row.features.is_set(*slot))
                    .map(|(_, id)| id.clone())
                    .collect::<Vec<_>>()
            });
        }

        Self {
            schema,
            rows,
            profiles,
        }
    }

    pub fn schema(&self) -> &SymptomSchema {
        &self.schema
    }

    pub fn rows(&self) -> &[LabelledRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reference symptom profile for a condition, in column order.
    pub fn profile(&self, condition: &str) -> Option<&[SymptomId]> {
        self.profiles.get(condition).map(Vec::as_slice)
    }

    /// Distinct condition labels, sorted.
    pub fn conditions(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
