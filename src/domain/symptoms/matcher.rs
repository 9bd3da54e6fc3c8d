//! Approximate matching of utterances against lexicon phrases.
//!
//! Two interchangeable backends share one acceptance contract: a candidate
//! phrase matches when its similarity is at least the configured threshold
//! (0.80 by default).
//!
//! - [`RatioMatcher`] compares the whole utterance with every candidate using
//!   `rapidfuzz`'s normalized indel ratio and keeps the best `max_candidates`
//!   hits. Compiled with the `ratio-matcher` feature, which pulls in
//!   `rapidfuzz`.
//! - [`TokenMatcher`] splits the utterance into alphabetic tokens (three
//!   letters or more) and adjacent token pairs, keeping up to three close
//!   candidates per token by normalized Levenshtein similarity (`strsim`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::warn;

#[cfg(feature = "ratio-matcher")]
use rapidfuzz::fuzz;
use strsim::normalized_levenshtein;

/// Default acceptance threshold on the 0-1 similarity scale.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.80;

/// Default number of hits the ratio backend keeps per utterance.
pub const DEFAULT_MAX_CANDIDATES: usize = 20;

/// Close matches kept per token by the token backend.
const MATCHES_PER_TOKEN: usize = 3;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]{3,}").expect("token pattern is valid"));

/// Capability to find lexicon phrases similar to an utterance.
pub trait ApproximateMatcher: Send + Sync + fmt::Debug {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Minimum similarity for a candidate to be accepted.
    fn threshold(&self) -> f64;

    /// Returns the candidates accepted for a lower-cased utterance.
    fn find_matches<'c>(&self, utterance: &str, candidates: &[&'c str]) -> Vec<&'c str>;
}

/// Which backend to use, as configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherStrategy {
    /// Ratio backend when compiled in, token backend otherwise.
    #[default]
    Auto,
    /// Whole-utterance ratio backend.
    Ratio,
    /// Token backend.
    Token,
}

/// Builds the matcher for a strategy, degrading to the token backend when
/// the ratio backend is not compiled in.
pub fn select_matcher(
    strategy: MatcherStrategy,
    threshold: f64,
    max_candidates: usize,
) -> Box<dyn ApproximateMatcher> {
    match strategy {
        MatcherStrategy::Token => Box::new(TokenMatcher::new(threshold)),
        MatcherStrategy::Auto | MatcherStrategy::Ratio => {
            ratio_or_fallback(strategy, threshold, max_candidates)
        }
    }
}

#[cfg(feature = "ratio-matcher")]
fn ratio_or_fallback(
    _strategy: MatcherStrategy,
    threshold: f64,
    max_candidates: usize,
) -> Box<dyn ApproximateMatcher> {
    Box::new(RatioMatcher::new(threshold, max_candidates))
}

#[cfg(not(feature = "ratio-matcher"))]
fn ratio_or_fallback(
    strategy: MatcherStrategy,
    threshold: f64,
    _max_candidates: usize,
) -> Box<dyn ApproximateMatcher> {
    if strategy == MatcherStrategy::Ratio {
        warn!("Ratio matcher not compiled in, falling back to token matching");
    }
    Box::new(TokenMatcher::new(threshold))
}

/// Whole-utterance ratio matcher backed by `rapidfuzz`.
#[cfg(feature = "ratio-matcher")]
#[derive(Debug, Clone)]
pub struct RatioMatcher {
    threshold: f64,
    max_candidates: usize,
}

#[cfg(feature = "ratio-matcher")]
impl RatioMatcher {
    pub fn new(threshold: f64, max_candidates: usize) -> Self {
        Self {
            threshold: sanitize_threshold(threshold),
            max_candidates: max_candidates.max(1),
        }
    }
}

#[cfg(feature = "ratio-matcher")]
impl ApproximateMatcher for RatioMatcher {
    fn name(&self) -> &'static str {
        "ratio"
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn find_matches<'c>(&self, utterance: &str, candidates: &[&'c str]) -> Vec<&'c str> {
        let mut scored: Vec<(f64, &'c str)> = candidates
            .iter()
            .map(|candidate| (fuzz::ratio(utterance.chars(), candidate.chars()), *candidate))
            .filter(|(score, _)| *score >= self.threshold)
            .collect();

        scored.sort_by(by_score_desc);
        scored
            .into_iter()
            .take(self.max_candidates)
            .map(|(_, candidate)| candidate)
            .collect()
    }
}

/// Token-level edit-distance matcher.
#[derive(Debug, Clone)]
pub struct TokenMatcher {
    threshold: f64,
}

impl TokenMatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: sanitize_threshold(threshold),
        }
    }

    /// Alphabetic tokens of three letters or more, plus adjacent pairs so
    /// two-word phrases can match.
    fn tokens(utterance: &str) -> Vec<String> {
        let words: Vec<&str> = TOKEN_PATTERN
            .find_iter(utterance)
            .map(|m| m.as_str())
            .collect();

        let mut tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        tokens.extend(words.windows(2).map(|pair| pair.join(" ")));
        tokens
    }
}

impl ApproximateMatcher for TokenMatcher {
    fn name(&self) -> &'static str {
        "token"
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn find_matches<'c>(&self, utterance: &str, candidates: &[&'c str]) -> Vec<&'c str> {
        let mut accepted = Vec::new();

        for token in Self::tokens(utterance) {
            let mut scored: Vec<(f64, &'c str)> = candidates
                .iter()
                .map(|candidate| (normalized_levenshtein(&token, candidate), *candidate))
                .filter(|(score, _)| *score >= self.threshold)
                .collect();

            scored.sort_by(by_score_desc);
            for (_, candidate) in scored.into_iter().take(MATCHES_PER_TOKEN) {
                if !accepted.contains(&candidate) {
                    accepted.push(candidate);
                }
            }
        }

        accepted
    }
}

fn by_score_desc(a: &(f64, &str), b: &(f64, &str)) -> Ordering {
    b.0.partial_cmp(&a.0)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.1.cmp(b.1))
}

fn sanitize_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() && threshold > 0.0 && threshold <= 1.0 {
        threshold
    } else {
        warn!(threshold, "Invalid match threshold, using default");
        DEFAULT_MATCH_THRESHOLD
    }
}
