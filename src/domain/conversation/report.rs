//! Final diagnosis report.

use std::fmt::Write;

use super::replies::ASSISTANT_NAME;
use crate::domain::knowledge::KnowledgeBase;
use crate::domain::symptoms::SymptomSet;

pub const DEFAULT_DESCRIPTION: &str = "No detailed description available.";
pub const DISCLAIMER: &str =
    "Please consult a healthcare professional for proper diagnosis and treatment.";
pub const REGISTRATION_PROMPT: &str =
    "To save this consultation to your history, please register or log in.";

/// Inputs of the report.
#[derive(Debug)]
pub struct FinalReport<'a> {
    pub condition: &'a str,
    pub symptoms: &'a SymptomSet,
    pub display_name: &'a str,
    /// Append the registration prompt; set when the consultation will not
    /// be saved.
    pub offer_registration: bool,
}

impl FinalReport<'_> {
    /// Renders the report with descriptions and precautions from `knowledge`.
    ///
    /// Sections: symptoms considered, condition, description (default text
    /// when unknown), numbered precautions (omitted when none), disclaimer,
    /// sign-off, and the registration prompt when requested.
    pub fn render(&self, knowledge: &KnowledgeBase) -> String {
        let mut text = String::from("Diagnosis Result\n\n");

        let considered: Vec<String> = knowledge
            .by_severity(self.symptoms)
            .into_iter()
            .map(|id| id.display_form())
            .collect();
        if !considered.is_empty() {
            let _ = writeln!(text, "Symptoms considered: {}\n", considered.join(", "));
        }

        let _ = writeln!(
            text,
            "Based on your symptoms, you are likely suffering from:\n{}\n",
            self.condition
        );

        let about = knowledge
            .description(self.condition)
            .unwrap_or(DEFAULT_DESCRIPTION);
        let _ = writeln!(text, "About this condition:\n{about}\n");

        let precautions = knowledge.precautions(self.condition);
        if !precautions.is_empty() {
            text.push_str("Recommended Precautions:\n");
            for (i, precaution) in precautions.iter().enumerate() {
                let _ = writeln!(text, "{}. {}", i + 1, precaution);
            }
            text.push('\n');
        }

        let _ = writeln!(text, "{DISCLAIMER}\n");
        let _ = write!(
            text,
            "Thank you for using {ASSISTANT_NAME}, {}!",
            self.display_name
        );

        if self.offer_registration {
            let _ = write!(text, "\n\n{REGISTRATION_PROMPT}");
        }

        text
    }
}
