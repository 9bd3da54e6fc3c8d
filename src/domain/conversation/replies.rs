//! Reply texts for each intake step.

use super::answers::{MAX_AGE, MIN_AGE};

/// Name the assistant introduces itself with.
pub const ASSISTANT_NAME: &str = "MyAI";

pub fn welcome() -> String {
    format!(
        "Hello! I'm {ASSISTANT_NAME}, your healthcare assistant.\n\
         Welcome to the HealthCare ChatBot!\n\
         What is your name?"
    )
}

pub fn name_missing() -> String {
    "Please tell me your name.".to_string()
}

pub fn ask_age(name: &str) -> String {
    format!("Nice to meet you, {name}! How old are you?")
}

pub fn age_out_of_range() -> String {
    format!("Please enter a valid age between {MIN_AGE} and {MAX_AGE}.")
}

pub fn age_not_a_number() -> String {
    "Age must be a number. Please try again.".to_string()
}

pub fn ask_gender(name: &str) -> String {
    format!("What is your gender, {name}? (Male/Female/Other)")
}

pub fn gender_invalid() -> String {
    "Please enter Male, Female, or Other.".to_string()
}

pub fn ask_symptoms() -> String {
    "Please describe your symptoms in a few words (e.g., 'I have a fever and cough')".to_string()
}

pub fn symptoms_unrecognized() -> String {
    "Sorry, I couldn't recognize those symptoms. Please try again (e.g., fever, cough, headache)"
        .to_string()
}

pub fn symptoms_detected(display_forms: &[String]) -> String {
    format!(
        "Detected symptoms: {}\nFor how many days have you had these symptoms?",
        display_forms.join(", ")
    )
}

pub fn ask_severity() -> String {
    "On a scale of 1-10, how severe is your condition?".to_string()
}

pub fn ask_preexist() -> String {
    "Do you have any pre-existing medical conditions? (e.g., diabetes, heart disease)".to_string()
}

pub fn ask_lifestyle() -> String {
    "Do you smoke, drink alcohol, or have irregular sleep patterns?".to_string()
}

pub fn ask_family() -> String {
    "Is there any family history of similar illnesses?".to_string()
}

pub fn ask_clarifying(symptom_display: &str) -> String {
    format!("Do you experience {symptom_display}? (yes/no)")
}
