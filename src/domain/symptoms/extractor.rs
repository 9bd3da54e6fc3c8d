//! Free-text symptom extraction.
//!
//! Three passes over the lower-cased utterance, unioned into one set:
//! 1. every synonym phrase occurring as a substring,
//! 2. every known symptom's human-readable form occurring as a substring,
//! 3. approximate matches of the utterance against both phrase tables.

use std::sync::Arc;
use tracing::debug;

use super::lexicon::SymptomLexicon;
use super::matcher::ApproximateMatcher;
use super::symptom_id::SymptomSet;

/// Turns an utterance into canonical symptom ids.
#[derive(Debug, Clone)]
pub struct SymptomExtractor {
    lexicon: Arc<SymptomLexicon>,
    matcher: Arc<dyn ApproximateMatcher>,
}

impl SymptomExtractor {
    pub fn new(lexicon: Arc<SymptomLexicon>, matcher: Arc<dyn ApproximateMatcher>) -> Self {
        Self { lexicon, matcher }
    }

    /// Extracts the set of symptoms mentioned in `utterance`.
    ///
    /// An empty set means nothing was recognized.
    pub fn extract(&self, utterance: &str) -> SymptomSet {
        let text = utterance.trim().to_lowercase();
        let mut found = SymptomSet::new();
        if text.is_empty() {
            return found;
        }

        for (phrase, id) in self.lexicon.synonyms() {
            if text.contains(phrase) {
                found.insert(id.clone());
            }
        }

        for (display, id) in self.lexicon.display_forms() {
            if text.contains(display) {
                found.insert(id.clone());
            }
        }

        let exact_hits = found.len();

        let candidates = self.lexicon.match_candidates();
        for phrase in self.matcher.find_matches(&text, &candidates) {
            found.extend(self.lexicon.ids_for(phrase).cloned());
        }

        debug!(
            matcher = self.matcher.name(),
            exact = exact_hits,
            total = found.len(),
            "Extracted symptoms"
        );

        found
    }

    /// The lexicon backing this extractor.
    pub fn lexicon(&self) -> &SymptomLexicon {
        &self.lexicon
    }
}
