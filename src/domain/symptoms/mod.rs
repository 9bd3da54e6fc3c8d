//! Symptoms domain module.
//!
//! Canonical symptom ids, the phrase lexicon and the extraction pipeline that
//! turns free text into a symptom set.

mod extractor;
mod lexicon;
mod matcher;
mod symptom_id;

pub use extractor::SymptomExtractor;
pub use lexicon::{SymptomLexicon, DEFAULT_SYNONYMS};
#[cfg(feature = "ratio-matcher")]
pub use matcher::RatioMatcher;
pub use matcher::{
    select_matcher, ApproximateMatcher, MatcherStrategy, TokenMatcher, DEFAULT_MATCH_THRESHOLD,
    DEFAULT_MAX_CANDIDATES,
};
pub use symptom_id::{SymptomId, SymptomSet};
