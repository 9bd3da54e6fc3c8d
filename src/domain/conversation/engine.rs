//! Intake conversation engine.
//!
//! Drives one step of the dialogue: takes the current state and the user's
//! message, returns the next state and the reply. The engine holds no
//! per-session data, so one instance serves every session concurrently.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::answers::{contains_greeting, is_affirmative, parse_age, Gender};
use super::consultation::{ConsultationRecord, SessionIdentity};
use super::replies;
use super::report::FinalReport;
use super::state::ConversationState;
use super::step::IntakeStep;
use crate::domain::diagnosis::{ClarifyingQuestionSelector, ClassificationResult};
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::knowledge::KnowledgeBase;
use crate::domain::symptoms::{SymptomExtractor, SymptomSet};
use crate::ports::{ClassifierError, DiseaseClassifier};

/// Behavioural switches for the engine.
#[derive(Debug, Clone, Default)]
pub struct ConversationEngineConfig {
    /// Restart the intake when a greeting appears at any step, not only at
    /// `welcome`.
    pub greeting_resets_mid_flow: bool,
    /// Consultations of anonymous sessions are saved too, so the report does
    /// not ask them to register.
    pub anonymous_consultations_saved: bool,
}

/// Failures that stop a step from completing. The caller keeps the previous
/// state.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No trained model is loaded")]
    ModelUnavailable,

    #[error("Classification failed: {0}")]
    Classifier(ClassifierError),

    #[error("Invalid step transition: {0}")]
    InvalidTransition(#[from] ValidationError),
}

impl From<ClassifierError> for EngineError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::ModelUnavailable => EngineError::ModelUnavailable,
            other => EngineError::Classifier(other),
        }
    }
}

/// Result of one step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub state: ConversationState,
    pub reply: String,
    /// Present whenever the step produced a final report.
    pub consultation: Option<ConsultationRecord>,
}

impl StepOutcome {
    fn reply(state: ConversationState, reply: String) -> Self {
        Self {
            state,
            reply,
            consultation: None,
        }
    }
}

/// The intake state machine.
pub struct ConversationEngine {
    extractor: SymptomExtractor,
    classifier: Arc<dyn DiseaseClassifier>,
    selector: ClarifyingQuestionSelector,
    knowledge: Arc<KnowledgeBase>,
    config: ConversationEngineConfig,
}

impl ConversationEngine {
    pub fn new(
        extractor: SymptomExtractor,
        classifier: Arc<dyn DiseaseClassifier>,
        selector: ClarifyingQuestionSelector,
        knowledge: Arc<KnowledgeBase>,
    ) -> Self {
        Self {
            extractor,
            classifier,
            selector,
            knowledge,
            config: ConversationEngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ConversationEngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ConversationEngineConfig {
        &self.config
    }

    /// Processes one user message.
    ///
    /// Invalid answers (bad age, unknown gender, unrecognised symptoms) are
    /// not errors: the returned state is unchanged and the reply explains what
    /// is expected.
    ///
    /// # Errors
    /// `EngineError::ModelUnavailable` when a step needs a prediction and the
    /// classifier has no model.
    pub async fn step(
        &self,
        state: &ConversationState,
        input: &str,
        identity: &SessionIdentity,
    ) -> Result<StepOutcome, EngineError> {
        let input = input.trim();
        let mut next = state.clone();

        debug!(step = %state.step(), "Processing intake step");

        if self.config.greeting_resets_mid_flow
            && state.step() != IntakeStep::Welcome
            && contains_greeting(input)
        {
            debug!(from = %state.step(), "Greeting restarts intake");
            next.restart();
            return Ok(StepOutcome::reply(next, replies::welcome()));
        }

        match state.step() {
            IntakeStep::Welcome => {
                next.restart();
                Ok(StepOutcome::reply(next, replies::welcome()))
            }

            IntakeStep::Name => {
                if input.is_empty() {
                    return Ok(StepOutcome::reply(next, replies::name_missing()));
                }
                next.name = Some(input.to_string());
                advance(&mut next, IntakeStep::Age)?;
                Ok(StepOutcome::reply(next, replies::ask_age(input)))
            }

            IntakeStep::Age => match parse_age(input) {
                Ok(age) => {
                    next.age = Some(age);
                    advance(&mut next, IntakeStep::Gender)?;
                    let reply = replies::ask_gender(next.name().unwrap_or_default());
                    Ok(StepOutcome::reply(next, reply))
                }
                Err(ValidationError::OutOfRange { .. }) => {
                    Ok(StepOutcome::reply(next, replies::age_out_of_range()))
                }
                Err(_) => Ok(StepOutcome::reply(next, replies::age_not_a_number())),
            },

            IntakeStep::Gender => match Gender::parse(input) {
                Ok(gender) => {
                    next.gender = Some(gender);
                    advance(&mut next, IntakeStep::Symptoms)?;
                    Ok(StepOutcome::reply(next, replies::ask_symptoms()))
                }
                Err(_) => Ok(StepOutcome::reply(next, replies::gender_invalid())),
            },

            IntakeStep::Symptoms => self.on_symptoms(next, input).await,

            IntakeStep::Duration => {
                next.days = Some(input.to_string());
                advance(&mut next, IntakeStep::Severity)?;
                Ok(StepOutcome::reply(next, replies::ask_severity()))
            }

            IntakeStep::Severity => {
                next.severity = Some(input.to_string());
                advance(&mut next, IntakeStep::Preexist)?;
                Ok(StepOutcome::reply(next, replies::ask_preexist()))
            }

            IntakeStep::Preexist => {
                next.preexist = Some(input.to_string());
                advance(&mut next, IntakeStep::Lifestyle)?;
                Ok(StepOutcome::reply(next, replies::ask_lifestyle()))
            }

            IntakeStep::Lifestyle => {
                next.lifestyle = Some(input.to_string());
                advance(&mut next, IntakeStep::Family)?;
                Ok(StepOutcome::reply(next, replies::ask_family()))
            }

            IntakeStep::Family => {
                next.family = Some(input.to_string());
                let questions = match next.predicted_condition() {
                    Some(condition) => self.selector.select(condition, next.symptoms()),
                    None => Vec::new(),
                };
                debug!(questions = questions.len(), "Selected clarifying questions");
                next.set_clarifying_questions(questions);

                if next.pending_question().is_some() {
                    advance(&mut next, IntakeStep::Clarify)?;
                    let reply = self.ask_pending(&next);
                    Ok(StepOutcome::reply(next, reply))
                } else {
                    self.finish(next, identity).await
                }
            }

            IntakeStep::Clarify => {
                if let Some(symptom) = next.pending_question().cloned() {
                    if is_affirmative(input) {
                        debug!(symptom = %symptom, "Clarifying symptom confirmed");
                        next.symptoms.insert(symptom);
                    }
                }
                next.advance_clarify_cursor();

                if next.pending_question().is_some() {
                    let reply = self.ask_pending(&next);
                    Ok(StepOutcome::reply(next, reply))
                } else {
                    self.finish(next, identity).await
                }
            }

            IntakeStep::Final => self.finish(next, identity).await,
        }
    }

    async fn on_symptoms(
        &self,
        mut next: ConversationState,
        input: &str,
    ) -> Result<StepOutcome, EngineError> {
        let found = self.extractor.extract(input);
        if found.is_empty() {
            debug!("No symptoms recognized");
            return Ok(StepOutcome::reply(next, replies::symptoms_unrecognized()));
        }

        let result = self.classify(&found).await?;
        let detected: Vec<String> = self
            .knowledge
            .by_severity(&found)
            .into_iter()
            .map(|id| id.display_form())
            .collect();

        next.symptoms = found;
        next.predicted_condition = Some(result.condition().to_string());
        next.confidence = Some(result.confidence());
        advance(&mut next, IntakeStep::Duration)?;

        Ok(StepOutcome::reply(next, replies::symptoms_detected(&detected)))
    }

    /// Runs the final prediction and builds the report. Safe to repeat.
    async fn finish(
        &self,
        mut next: ConversationState,
        identity: &SessionIdentity,
    ) -> Result<StepOutcome, EngineError> {
        let result = self.classify(next.symptoms()).await?;
        next.predicted_condition = Some(result.condition().to_string());
        next.confidence = Some(result.confidence());
        advance(&mut next, IntakeStep::Final)?;

        let report = FinalReport {
            condition: result.condition(),
            symptoms: next.symptoms(),
            display_name: identity.display_name(&next),
            offer_registration: !identity.is_authenticated()
                && !self.config.anonymous_consultations_saved,
        }
        .render(&self.knowledge);

        let record = ConsultationRecord::capture(&next, identity, &result);

        info!(
            condition = %result.condition(),
            confidence = result.confidence(),
            symptoms = next.symptoms().len(),
            "Consultation completed"
        );

        Ok(StepOutcome {
            state: next,
            reply: report,
            consultation: Some(record),
        })
    }

    async fn classify(&self, symptoms: &SymptomSet) -> Result<ClassificationResult, EngineError> {
        self.classifier.predict(symptoms).await.map_err(|err| {
            warn!(classifier = self.classifier.name(), error = %err, "Classification failed");
            EngineError::from(err)
        })
    }

    fn ask_pending(&self, state: &ConversationState) -> String {
        let symptom = state
            .pending_question()
            .map(|id| id.display_form())
            .unwrap_or_default();
        replies::ask_clarifying(&symptom)
    }
}

fn advance(state: &mut ConversationState, target: IntakeStep) -> Result<(), ValidationError> {
    state.step = state.step.transition_to(target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnosis::{FeatureVector, LabelledRow, ReferenceData, SymptomSchema};
    use crate::domain::foundation::UserId;
    use crate::domain::symptoms::{
        select_matcher, MatcherStrategy, SymptomId, SymptomLexicon,
    };
    use crate::ports::ClassifierHealth;
    use async_trait::async_trait;
    use proptest::prelude::*;

    const IDS: &[&str] = &[
        "itching",
        "skin_rash",
        "headache",
        "nausea",
        "vomiting",
        "chills",
        "high_fever",
        "dry_cough",
    ];

    /// Predicts Migraine whenever a headache is present, otherwise Common
    /// Cold. Confidence grows with the number of symptoms.
    struct StubClassifier;

    #[async_trait]
    impl DiseaseClassifier for StubClassifier {
        fn name(&self) -> &'static str {
            "stub"
        }

        async fn predict(
            &self,
            symptoms: &SymptomSet,
        ) -> Result<ClassificationResult, ClassifierError> {
            let condition = if symptoms.iter().any(|s| s.as_str() == "headache") {
                "Migraine"
            } else {
                "Common Cold"
            };
            let confidence = (0.4 + 0.1 * symptoms.len() as f64).min(1.0);
            Ok(ClassificationResult::new(condition, confidence).unwrap())
        }

        async fn health(&self) -> Result<ClassifierHealth, ClassifierError> {
            Ok(ClassifierHealth {
                ok: true,
                model_loaded: true,
            })
        }
    }

    struct UnavailableClassifier;

    #[async_trait]
    impl DiseaseClassifier for UnavailableClassifier {
        fn name(&self) -> &'static str {
            "unavailable"
        }

        async fn predict(&self, _: &SymptomSet) -> Result<ClassificationResult, ClassifierError> {
            Err(ClassifierError::ModelUnavailable)
        }

        async fn health(&self) -> Result<ClassifierHealth, ClassifierError> {
            Ok(ClassifierHealth {
                ok: true,
                model_loaded: false,
            })
        }
    }

    fn id(raw: &str) -> SymptomId {
        SymptomId::new(raw).unwrap()
    }

    fn row(present: &[&str], condition: &str) -> LabelledRow {
        let flags = IDS.iter().map(|i| u8::from(present.contains(i))).collect();
        LabelledRow {
            features: FeatureVector::from_flags(flags),
            condition: condition.to_string(),
        }
    }

    fn engine_with(classifier: Arc<dyn DiseaseClassifier>) -> ConversationEngine {
        let schema = SymptomSchema::new(IDS.iter().map(|s| id(s)));
        let reference = Arc::new(ReferenceData::new(
            schema.clone(),
            vec![
                row(&["headache", "nausea", "vomiting", "chills"], "Migraine"),
                row(&["high_fever", "chills", "dry_cough"], "Common Cold"),
                row(&["itching", "skin_rash"], "Fungal infection"),
            ],
        ));
        let lexicon = Arc::new(SymptomLexicon::with_default_synonyms(schema.ids()));
        let matcher = Arc::from(select_matcher(MatcherStrategy::Auto, 0.8, 20));

        let mut knowledge = KnowledgeBase::new();
        knowledge.add_description("Migraine", "A primary headache disorder.");
        knowledge.add_precautions("Migraine", ["meditation", "reduce stress"]);
        knowledge.add_severity(id("vomiting"), 5);
        knowledge.add_severity(id("nausea"), 5);
        knowledge.add_severity(id("headache"), 3);

        ConversationEngine::new(
            SymptomExtractor::new(lexicon, matcher),
            classifier,
            ClarifyingQuestionSelector::new(reference),
            Arc::new(knowledge),
        )
    }

    fn engine() -> ConversationEngine {
        engine_with(Arc::new(StubClassifier))
    }

    async fn run(
        engine: &ConversationEngine,
        state: ConversationState,
        inputs: &[&str],
    ) -> (ConversationState, Vec<StepOutcome>) {
        let mut state = state;
        let mut outcomes = Vec::new();
        for input in inputs {
            let outcome = engine
                .step(&state, input, &SessionIdentity::anonymous())
                .await
                .unwrap();
            state = outcome.state.clone();
            outcomes.push(outcome);
        }
        (state, outcomes)
    }

    async fn at_symptoms(engine: &ConversationEngine) -> ConversationState {
        run(engine, ConversationState::new(), &["hi", "Alex", "30", "male"])
            .await
            .0
    }

    mod intake_fields {
        use super::*;

        #[tokio::test]
        async fn any_text_at_welcome_starts_intake() {
            let (state, outcomes) = run(&engine(), ConversationState::new(), &["what?"]).await;
            assert_eq!(state.step(), IntakeStep::Name);
            assert!(outcomes[0].reply.contains("What is your name?"));
        }

        #[tokio::test]
        async fn name_is_stored_and_used() {
            let (state, outcomes) =
                run(&engine(), ConversationState::new(), &["hello", "Alex"]).await;
            assert_eq!(state.step(), IntakeStep::Age);
            assert_eq!(state.name(), Some("Alex"));
            assert!(outcomes[1].reply.contains("Alex"));
        }

        #[tokio::test]
        async fn invalid_ages_reprompt_without_advancing() {
            let engine = engine();
            let (at_age, _) = run(&engine, ConversationState::new(), &["hi", "Alex"]).await;

            for input in ["0", "121", "abc"] {
                let outcome = engine
                    .step(&at_age, input, &SessionIdentity::anonymous())
                    .await
                    .unwrap();
                assert_eq!(outcome.state, at_age, "input {input:?} changed state");
                assert_eq!(outcome.state.step(), IntakeStep::Age);
            }
        }

        #[tokio::test]
        async fn age_messages_distinguish_range_from_format() {
            let engine = engine();
            let (at_age, _) = run(&engine, ConversationState::new(), &["hi", "Alex"]).await;
            let anon = SessionIdentity::anonymous();

            let range = engine.step(&at_age, "200", &anon).await.unwrap();
            let format = engine.step(&at_age, "old", &anon).await.unwrap();

            let huge = engine
                .step(&at_age, "99999999999999999999", &anon)
                .await
                .unwrap();

            assert!(range.reply.contains("between 1 and 120"));
            assert!(huge.reply.contains("between 1 and 120"));
            assert!(format.reply.contains("must be a number"));
        }

        #[tokio::test]
        async fn gender_accepts_initial_and_rejects_other_text() {
            let engine = engine();
            let (at_gender, _) =
                run(&engine, ConversationState::new(), &["hi", "Alex", "30"]).await;
            let anon = SessionIdentity::anonymous();

            let bad = engine.step(&at_gender, "robot", &anon).await.unwrap();
            assert_eq!(bad.state.step(), IntakeStep::Gender);

            let good = engine.step(&at_gender, "F", &anon).await.unwrap();
            assert_eq!(good.state.step(), IntakeStep::Symptoms);
            assert_eq!(good.state.gender(), Some(Gender::Female));
        }

        proptest! {
            #[test]
            fn out_of_range_ages_never_advance(age in prop_oneof![-500i64..=0, 121i64..5000]) {
                let rt = tokio::runtime::Runtime::new().unwrap();
                let engine = engine();
                let (at_age, _) = rt.block_on(run(&engine, ConversationState::new(), &["hi", "Alex"]));

                let outcome = rt
                    .block_on(engine.step(&at_age, &age.to_string(), &SessionIdentity::anonymous()))
                    .unwrap();

                prop_assert_eq!(outcome.state.step(), IntakeStep::Age);
                prop_assert_eq!(outcome.state.age(), None);
            }
        }
    }

    mod symptoms_step {
        use super::*;

        #[tokio::test]
        async fn unrecognized_text_stays_at_symptoms() {
            let engine = engine();
            let state = at_symptoms(&engine).await;

            let outcome = engine
                .step(&state, "asdkjasd", &SessionIdentity::anonymous())
                .await
                .unwrap();

            assert_eq!(outcome.state.step(), IntakeStep::Symptoms);
            assert!(outcome.state.symptoms().is_empty());
            assert!(outcome.reply.contains("couldn't recognize"));
        }

        #[tokio::test]
        async fn detected_symptoms_are_listed_by_severity() {
            let engine = engine();
            let state = at_symptoms(&engine).await;

            let outcome = engine
                .step(&state, "I have a headache and nausea", &SessionIdentity::anonymous())
                .await
                .unwrap();

            assert_eq!(outcome.state.step(), IntakeStep::Duration);
            assert!(outcome.reply.starts_with("Detected symptoms: nausea, headache"));
            assert_eq!(outcome.state.predicted_condition(), Some("Migraine"));
        }

        #[tokio::test]
        async fn model_unavailable_is_an_error() {
            let engine = engine_with(Arc::new(UnavailableClassifier));
            let state = at_symptoms(&engine).await;

            let result = engine
                .step(&state, "headache", &SessionIdentity::anonymous())
                .await;

            assert!(matches!(result, Err(EngineError::ModelUnavailable)));
        }
    }

    mod full_flow {
        use super::*;

        pub(super) const SCENARIO: &[&str] = &[
            "hi",
            "Alex",
            "30",
            "male",
            "I have a headache and nausea",
            "3 days",
            "5",
            "none",
            "no",
            "no",
        ];

        #[tokio::test]
        async fn scenario_walks_every_step_in_order() {
            let (state, outcomes) = run(&engine(), ConversationState::new(), SCENARIO).await;

            let steps: Vec<IntakeStep> = outcomes.iter().map(|o| o.state.step()).collect();
            assert_eq!(
                &steps[..9],
                &[
                    IntakeStep::Name,
                    IntakeStep::Age,
                    IntakeStep::Gender,
                    IntakeStep::Symptoms,
                    IntakeStep::Duration,
                    IntakeStep::Severity,
                    IntakeStep::Preexist,
                    IntakeStep::Lifestyle,
                    IntakeStep::Family,
                ]
            );
            assert!(matches!(state.step(), IntakeStep::Clarify | IntakeStep::Final));

            let symptoms: Vec<&str> = state.symptoms().iter().map(SymptomId::as_str).collect();
            assert_eq!(symptoms, vec!["headache", "nausea"]);
            assert_eq!(state.predicted_condition(), Some("Migraine"));
            let confidence = state.confidence().unwrap();
            assert!((0.0..=1.0).contains(&confidence));
        }

        #[tokio::test]
        async fn clarify_yes_then_no_adds_one_symptom() {
            let engine = engine();
            let (at_clarify, _) = run(&engine, ConversationState::new(), SCENARIO).await;
            assert_eq!(at_clarify.step(), IntakeStep::Clarify);
            assert_eq!(
                at_clarify.clarifying_questions(),
                &[id("vomiting"), id("chills")]
            );

            let (state, outcomes) = run(&engine, at_clarify, &["yes", "no"]).await;

            assert!(outcomes[0].reply.contains("Do you experience chills?"));
            assert_eq!(state.step(), IntakeStep::Final);
            assert!(state.symptoms().contains(&id("vomiting")));
            assert!(!state.symptoms().contains(&id("chills")));
            assert_eq!(state.symptoms().len(), 3);

            let report = &outcomes[1].reply;
            assert!(report.contains("Symptoms considered: nausea, vomiting, headache"));
            assert!(outcomes[1].consultation.is_some());
        }

        #[tokio::test]
        async fn family_without_questions_goes_straight_to_final() {
            let engine = engine();
            let inputs = [
                "hi",
                "Alex",
                "30",
                "m",
                "headache, nausea, vomiting and chills",
                "2",
                "7",
                "none",
                "no",
                "no",
            ];
            let (state, outcomes) = run(&engine, ConversationState::new(), &inputs).await;

            assert_eq!(state.step(), IntakeStep::Final);
            assert!(outcomes[9].reply.starts_with("Diagnosis Result"));
        }

        #[tokio::test]
        async fn final_is_idempotent() {
            let engine = engine();
            let (at_clarify, _) = run(&engine, ConversationState::new(), SCENARIO).await;
            let (at_final, first) = run(&engine, at_clarify, &["no", "no"]).await;

            let (again, second) = run(&engine, at_final.clone(), &["anything"]).await;

            assert_eq!(again.step(), IntakeStep::Final);
            assert_eq!(again.predicted_condition(), at_final.predicted_condition());
            assert_eq!(again.confidence(), at_final.confidence());
            let first_record = first[1].consultation.as_ref().unwrap();
            let second_record = second[0].consultation.as_ref().unwrap();
            assert_eq!(first_record.condition, second_record.condition);
            assert_eq!(first_record.confidence, second_record.confidence);
        }

        #[tokio::test]
        async fn authenticated_report_uses_username_and_skips_prompt() {
            let engine = engine();
            let (at_clarify, _) = run(&engine, ConversationState::new(), SCENARIO).await;
            let (at_final, _) = run(&engine, at_clarify, &["no", "no"]).await;
            let identity = SessionIdentity::authenticated(UserId::new("u-7").unwrap(), "alexj");

            let outcome = engine.step(&at_final, "again", &identity).await.unwrap();

            assert!(outcome.reply.contains("Thank you for using MyAI, alexj!"));
            assert!(!outcome.reply.contains("register or log in"));
            assert_eq!(
                outcome.consultation.unwrap().user_id,
                Some(UserId::new("u-7").unwrap())
            );
        }
    }

    mod registration {
        use super::*;

        async fn at_final(engine: &ConversationEngine) -> ConversationState {
            let (at_clarify, _) =
                run(engine, ConversationState::new(), full_flow::SCENARIO).await;
            run(engine, at_clarify, &["no", "no"]).await.0
        }

        #[tokio::test]
        async fn anonymous_report_asks_to_register() {
            let engine = engine();
            let state = at_final(&engine).await;

            let outcome = engine
                .step(&state, "again", &SessionIdentity::anonymous())
                .await
                .unwrap();

            assert!(outcome.reply.contains("register or log in"));
        }

        #[tokio::test]
        async fn saved_anonymous_report_skips_registration_prompt() {
            let engine = engine().with_config(ConversationEngineConfig {
                anonymous_consultations_saved: true,
                ..Default::default()
            });
            let state = at_final(&engine).await;

            let outcome = engine
                .step(&state, "again", &SessionIdentity::anonymous())
                .await
                .unwrap();

            assert!(!outcome.reply.contains("register or log in"));
            assert!(outcome.reply.contains("Thank you for using MyAI, Alex!"));
        }
    }

    mod greetings {
        use super::*;

        #[tokio::test]
        async fn greeting_mid_flow_is_ignored_by_default() {
            let engine = engine();
            let (at_age, _) = run(&engine, ConversationState::new(), &["hi", "Alex"]).await;

            let outcome = engine
                .step(&at_age, "hello", &SessionIdentity::anonymous())
                .await
                .unwrap();

            assert_eq!(outcome.state.step(), IntakeStep::Age);
        }

        #[tokio::test]
        async fn greeting_mid_flow_restarts_when_enabled() {
            let engine = engine().with_config(ConversationEngineConfig {
                greeting_resets_mid_flow: true,
                ..Default::default()
            });
            let state = at_symptoms(&engine).await;

            let outcome = engine
                .step(&state, "hey there", &SessionIdentity::anonymous())
                .await
                .unwrap();

            assert_eq!(outcome.state.step(), IntakeStep::Name);
            assert!(outcome.state.name().is_none());
        }

        #[tokio::test]
        async fn greeting_inside_a_word_does_not_restart() {
            let engine = engine().with_config(ConversationEngineConfig {
                greeting_resets_mid_flow: true,
                ..Default::default()
            });
            let state = at_symptoms(&engine).await;

            let outcome = engine
                .step(&state, "chills", &SessionIdentity::anonymous())
                .await
                .unwrap();

            assert_eq!(outcome.state.step(), IntakeStep::Duration);
        }
    }
}
