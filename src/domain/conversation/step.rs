//! Intake steps.
//!
//! The dialogue walks a fixed sequence of steps. Steps that validate their
//! input may stay where they are; the rest always advance.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Current position in the intake dialogue.
///
/// `Welcome` → `Name` → `Age` → `Gender` → `Symptoms` → `Duration` →
/// `Severity` → `Preexist` → `Lifestyle` → `Family` → (`Clarify`) → `Final`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStep {
    #[default]
    Welcome,
    Name,
    Age,
    Gender,
    Symptoms,
    Duration,
    Severity,
    Preexist,
    Lifestyle,
    Family,
    /// Yes/no follow-ups about symptoms linked to the predicted condition.
    Clarify,
    /// Report shown; asking again re-runs the prediction.
    Final,
}

impl IntakeStep {
    /// Every step in dialogue order.
    pub const ALL: [IntakeStep; 12] = [
        Self::Welcome,
        Self::Name,
        Self::Age,
        Self::Gender,
        Self::Symptoms,
        Self::Duration,
        Self::Severity,
        Self::Preexist,
        Self::Lifestyle,
        Self::Family,
        Self::Clarify,
        Self::Final,
    ];

    /// Wire name of the step.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Symptoms => "symptoms",
            Self::Duration => "duration",
            Self::Severity => "severity",
            Self::Preexist => "preexist",
            Self::Lifestyle => "lifestyle",
            Self::Family => "family",
            Self::Clarify => "clarify",
            Self::Final => "final",
        }
    }

    /// True for steps that re-prompt on invalid input.
    pub fn validates_input(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::Age | Self::Gender | Self::Symptoms
        )
    }
}

impl fmt::Display for IntakeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for IntakeStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use IntakeStep::*;
        match self {
            Welcome => vec![Name],
            Name => vec![Name, Age],
            Age => vec![Age, Gender],
            Gender => vec![Gender, Symptoms],
            Symptoms => vec![Symptoms, Duration],
            Duration => vec![Severity],
            Severity => vec![Preexist],
            Preexist => vec![Lifestyle],
            Lifestyle => vec![Family],
            Family => vec![Clarify, Final],
            Clarify => vec![Clarify, Final],
            Final => vec![Final],
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Final)
    }
}
