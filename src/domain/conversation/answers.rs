//! Interpretation of short user answers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

use crate::domain::foundation::ValidationError;

pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 120;

/// Greeting phrases that start (or restart) an intake.
pub const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "morning",
    "afternoon",
    "evening",
];

const AFFIRMATIVES: &[&str] = &["yes", "y", "yeah", "yep", "yup", "sure", "correct", "i do"];

static GREETING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives = GREETINGS.join("|");
    Regex::new(&format!(r"\b(?:{alternatives})\b")).expect("greeting pattern is valid")
});

/// Gender as normalised from the user's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Accepts male/female/other or their first letter, in any case.
    pub fn parse(answer: &str) -> Result<Self, ValidationError> {
        match answer.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" | "o" => Ok(Self::Other),
            _ => Err(ValidationError::invalid_format(
                "gender",
                "expected male, female or other",
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an age in whole years within [`MIN_AGE`]..=[`MAX_AGE`].
pub fn parse_age(answer: &str) -> Result<u8, ValidationError> {
    let value: i64 = answer.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => ValidationError::out_of_range("age", MIN_AGE, MAX_AGE, i64::MAX),
        IntErrorKind::NegOverflow => ValidationError::out_of_range("age", MIN_AGE, MAX_AGE, i64::MIN),
        _ => ValidationError::invalid_format("age", "age must be a whole number"),
    })?;

    if !(MIN_AGE..=MAX_AGE).contains(&value) {
        return Err(ValidationError::out_of_range("age", MIN_AGE, MAX_AGE, value));
    }

    u8::try_from(value).map_err(|_| ValidationError::out_of_range("age", MIN_AGE, MAX_AGE, value))
}

/// True when a clarifying answer means "yes". Anything else counts as "no".
///
/// Only the first clause is judged, so "yes, thank you" is a yes while
/// "yes and no" is not.
pub fn is_affirmative(answer: &str) -> bool {
    let normalized = answer
        .trim()
        .trim_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase();
    let first_clause = normalized
        .split(|c: char| c.is_ascii_punctuation())
        .next()
        .unwrap_or_default()
        .trim();
    AFFIRMATIVES.contains(&first_clause)
}

/// True when the text contains a greeting as a whole word or phrase.
pub fn contains_greeting(text: &str) -> bool {
    GREETING_PATTERN.is_match(&text.to_lowercase())
}
