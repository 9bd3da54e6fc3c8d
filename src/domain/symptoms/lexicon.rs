//! Phrase-to-symptom lexicon.
//!
//! Maps free-text phrases and synonyms onto the canonical ids of the
//! classifier's feature schema. Built once at start-up and read-only after.

use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::symptom_id::SymptomId;

/// Built-in synonym table: lay phrase -> canonical symptom id.
///
/// Each phrase names the same clinical sign as its target. Entries whose
/// target id is not part of the loaded schema are dropped when the lexicon is
/// built; the lexicon never invents ids.
pub const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
    // Stomach / digestive
    ("stomach ache", "stomach_pain"),
    ("belly pain", "stomach_pain"),
    ("tummy pain", "stomach_pain"),
    ("abdominal pain", "stomach_pain"),
    ("stomach cramps", "stomach_pain"),
    ("cramps", "cramps"),
    ("muscle cramp", "cramps"),
    ("leg cramps", "cramps"),
    ("bloating", "bloating"),
    ("bloated stomach", "bloating"),
    ("gas", "passage_of_gases"),
    ("flatulence", "passage_of_gases"),
    ("nausea", "nausea"),
    ("feeling sick", "nausea"),
    ("queasy", "nausea"),
    ("vomiting", "vomiting"),
    ("throwing up", "vomiting"),
    ("puking", "vomiting"),
    ("diarrhea", "diarrhoea"),
    ("loose motion", "diarrhoea"),
    ("watery stool", "diarrhoea"),
    ("constipation", "constipation"),
    ("hard stool", "constipation"),
    ("heartburn", "acidity"),
    ("acid reflux", "acidity"),
    ("burning chest", "acidity"),
    ("indigestion", "indigestion"),
    ("upset stomach", "indigestion"),
    ("loss of appetite", "loss_of_appetite"),
    ("no appetite", "loss_of_appetite"),
    ("weight loss", "weight_loss"),
    ("unintentional weight loss", "weight_loss"),
    ("weight gain", "weight_gain"),
    // Fever / infection
    ("fever", "high_fever"),
    ("high temperature", "high_fever"),
    ("elevated temperature", "high_fever"),
    ("low grade fever", "mild_fever"),
    ("chills", "chills"),
    ("shivering", "shivering"),
    ("sweating", "sweating"),
    ("night sweats", "sweating"),
    // Respiratory
    ("cough", "cough"),
    ("dry cough", "dry_cough"),
    ("wet cough", "phlegm"),
    ("sore throat", "throat_irritation"),
    ("scratchy throat", "throat_irritation"),
    ("shortness of breath", "breathlessness"),
    ("difficulty breathing", "breathlessness"),
    ("runny nose", "runny_nose"),
    ("stuffy nose", "congestion"),
    ("blocked nose", "congestion"),
    ("sneezing", "continuous_sneezing"),
    // Pain
    ("headache", "headache"),
    ("severe headache", "headache"),
    ("migraine", "headache"),
    ("dizziness", "dizziness"),
    ("lightheaded", "dizziness"),
    ("vertigo", "spinning_movements"),
    ("fatigue", "fatigue"),
    ("tiredness", "fatigue"),
    ("exhaustion", "fatigue"),
    ("weakness", "weakness_in_limbs"),
    ("body weakness", "weakness_in_limbs"),
    ("chest pain", "chest_pain"),
    ("tight chest", "chest_pain"),
    ("joint pain", "joint_pain"),
    ("aching joints", "joint_pain"),
    ("muscle pain", "muscle_pain"),
    ("body ache", "muscle_pain"),
    ("back pain", "back_pain"),
    ("lower back pain", "back_pain"),
    ("neck pain", "neck_pain"),
    ("stiff neck", "stiff_neck"),
    ("eye pain", "pain_behind_the_eyes"),
    ("red eyes", "redness_of_eyes"),
    // Skin
    ("itching", "itching"),
    ("itchy skin", "itching"),
    ("rash", "skin_rash"),
    ("skin eruption", "nodal_skin_eruptions"),
    ("hives", "skin_rash"),
    ("acne", "pus_filled_pimples"),
    ("pimples", "pus_filled_pimples"),
    // Mental health
    ("anxiety", "anxiety"),
    ("stress", "anxiety"),
    ("depression", "depression"),
    ("low mood", "depression"),
    ("mood swings", "mood_swings"),
    ("irritability", "irritability"),
    // Neurological
    ("blurry vision", "blurred_and_distorted_vision"),
    ("blurred vision", "blurred_and_distorted_vision"),
    ("tingling", "tingling_sensation"),
    ("confusion", "altered_sensorium"),
    // Urinary
    ("burning urination", "burning_micturition"),
    ("painful urination", "burning_micturition"),
    ("frequent urination", "polyuria"),
    // Cardiovascular
    ("palpitations", "palpitations"),
    ("racing heart", "fast_heart_rate"),
    ("fast heartbeat", "fast_heart_rate"),
    // General
    ("dehydration", "dehydration"),
    ("loss of smell", "loss_of_smell"),
    ("yellow skin", "yellowish_skin"),
];

/// Read-only mapping from phrases to canonical symptom ids.
#[derive(Debug, Clone, Default)]
pub struct SymptomLexicon {
    /// Synonym phrase (lower-case) -> canonical id.
    synonyms: BTreeMap<String, SymptomId>,
    /// Human-readable form of each known id -> canonical id.
    display_forms: BTreeMap<String, SymptomId>,
}

impl SymptomLexicon {
    /// Builds a lexicon from a synonym table and the classifier's known ids.
    ///
    /// Every known id is registered under its human-readable form. Synonyms
    /// pointing at ids outside `known` are discarded.
    pub fn build<'a, I>(synonyms: &[(&str, &str)], known: I) -> Self
    where
        I: IntoIterator<Item = &'a SymptomId>,
    {
        let display_forms: BTreeMap<String, SymptomId> = known
            .into_iter()
            .map(|id| (id.display_form(), id.clone()))
            .collect();
        let known_ids: BTreeSet<&SymptomId> = display_forms.values().collect();

        let mut kept = BTreeMap::new();
        let mut dropped = 0usize;
        for (phrase, target) in synonyms {
            let Ok(id) = SymptomId::new(*target) else {
                dropped += 1;
                continue;
            };
            if known_ids.contains(&id) {
                kept.insert(phrase.trim().to_lowercase(), id);
            } else {
                dropped += 1;
            }
        }

        debug!(
            synonyms = kept.len(),
            dropped,
            known = display_forms.len(),
            "Built symptom lexicon"
        );

        Self {
            synonyms: kept,
            display_forms,
        }
    }

    /// Builds a lexicon with the built-in synonym table.
    pub fn with_default_synonyms<'a, I>(known: I) -> Self
    where
        I: IntoIterator<Item = &'a SymptomId>,
    {
        Self::build(DEFAULT_SYNONYMS, known)
    }

    /// Maps an exact phrase to its canonical id. Synonyms win over
    /// human-readable forms.
    pub fn canonicalize(&self, phrase: &str) -> Option<&SymptomId> {
        let key = phrase.trim().to_lowercase();
        self.synonyms
            .get(&key)
            .or_else(|| self.display_forms.get(&key))
    }

    /// All ids an exact phrase maps to, across both tables.
    pub fn ids_for(&self, phrase: &str) -> impl Iterator<Item = &SymptomId> {
        self.synonyms
            .get(phrase)
            .into_iter()
            .chain(self.display_forms.get(phrase))
    }

    /// Synonym phrases with their ids.
    pub fn synonyms(&self) -> impl Iterator<Item = (&str, &SymptomId)> {
        self.synonyms.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Human-readable forms with their ids.
    pub fn display_forms(&self) -> impl Iterator<Item = (&str, &SymptomId)> {
        self.display_forms.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every phrase eligible for approximate matching.
    pub fn match_candidates(&self) -> Vec<&str> {
        self.synonyms
            .keys()
            .chain(self.display_forms.keys())
            .map(String::as_str)
            .collect()
    }

    /// Number of canonical ids the lexicon knows.
    pub fn known_count(&self) -> usize {
        self.display_forms.len()
    }
}
