use std::collections::HashMap;

use crate::domain::symptoms::SymptomId;

/// Precautions kept per condition.
pub const MAX_PRECAUTIONS: usize = 4;

/// Read-only lookup tables keyed by condition or symptom name.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    descriptions: HashMap<String, String>,
    precautions: HashMap<String, Vec<String>>,
    severity: HashMap<SymptomId, u32>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a description. Later entries for the same condition win.
    pub fn add_description(&mut self, condition: &str, description: &str) {
        self.descriptions
            .insert(condition.trim().to_string(), description.trim().to_string());
    }

    /// Registers precautions, dropping blanks and keeping at most
    /// [`MAX_PRECAUTIONS`].
    pub fn add_precautions<I, S>(&mut self, condition: &str, precautions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kept: Vec<String> = precautions
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .take(MAX_PRECAUTIONS)
            .collect();
        self.precautions.insert(condition.trim().to_string(), kept);
    }

    pub fn add_severity(&mut self, symptom: SymptomId, weight: u32) {
        self.severity.insert(symptom, weight);
    }

    pub fn description(&self, condition: &str) -> Option<&str> {
        self.descriptions.get(condition).map(String::as_str)
    }

    /// Precautions for a condition; empty when none are known.
    pub fn precautions(&self, condition: &str) -> &[String] {
        self.precautions
            .get(condition)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn severity(&self, symptom: &SymptomId) -> Option<u32> {
        self.severity.get(symptom).copied()
    }

    /// Sorts symptoms by descending severity weight, then by id. Unweighted
    /// symptoms sort last.
    pub fn by_severity<'a, I>(&self, symptoms: I) -> Vec<&'a SymptomId>
    where
        I: IntoIterator<Item = &'a SymptomId>,
    {
        let mut ordered: Vec<&SymptomId> = symptoms.into_iter().collect();
        ordered.sort_by(|a, b| {
            let wa = self.severity(a).unwrap_or(0);
            let wb = self.severity(b).unwrap_or(0);
            wb.cmp(&wa).then_with(|| a.cmp(b))
        });
        ordered
    }

    /// Table sizes as (descriptions, precautions, severity weights).
    pub fn sizes(&self) -> (usize, usize, usize) {
        (
            self.descriptions.len(),
            self.precautions.len(),
            self.severity.len(),
        )
    }
}
