//! Console front-end for the symptom intake assistant.
//!
//! Runs a single intake session over stdin/stdout. Logs go to stderr.

use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use symptom_intake::adapters::data::{load_knowledge_files, load_reference_file};
use symptom_intake::adapters::{
    FileSessionStore, InMemoryConsultationRecorder, InMemorySessionStore, JsonLinesConsultationRecorder,
    KnowledgeFiles, LocalClassifier, RemoteClassifier, RemoteClassifierConfig,
};
use symptom_intake::application::{
    ResetSessionCommand, ResetSessionHandler, SendMessageCommand, SendMessageConfig,
    SendMessageHandler,
};
use symptom_intake::config::{AppConfig, ClassifierBackend, RuntimeConfig, StorageBackend};
use symptom_intake::domain::conversation::{ConversationEngine, SessionIdentity, ASSISTANT_NAME};
use symptom_intake::domain::diagnosis::{ClarifyingQuestionSelector, ReferenceData};
use symptom_intake::domain::foundation::{SessionId, UserId};
use symptom_intake::domain::symptoms::{select_matcher, SymptomExtractor, SymptomLexicon};
use symptom_intake::ports::{ConsultationRecorder, DiseaseClassifier, SessionStore};

#[derive(Parser)]
#[command(name = "symptom-intake")]
#[command(about = "Conversational symptom intake assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Treat the session as signed in under this user name
    #[arg(long)]
    user: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    init_tracing(&config.runtime);
    config.validate()?;

    let reference = Arc::new(load_reference(&config));
    let knowledge = Arc::new(load_knowledge_files(&KnowledgeFiles {
        descriptions: config.data.descriptions_path(),
        precautions: config.data.precautions_path(),
        severity: config.data.severity_path(),
    })?);

    let classifier = build_classifier(&config, &reference).await?;

    let matcher = select_matcher(
        config.matching.strategy,
        config.matching.threshold,
        config.matching.max_candidates,
    );
    info!(matcher = matcher.name(), threshold = matcher.threshold(), "Matcher ready");
    let lexicon = Arc::new(SymptomLexicon::with_default_synonyms(reference.schema().ids()));

    let selector = ClarifyingQuestionSelector::new(Arc::clone(&reference))
        .with_max_questions(config.conversation.max_clarifying_questions);
    let engine = Arc::new(
        ConversationEngine::new(
            SymptomExtractor::new(lexicon, Arc::from(matcher)),
            classifier,
            selector,
            knowledge,
        )
        .with_config(config.engine_config()),
    );

    let sessions: Arc<dyn SessionStore> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemorySessionStore::new()),
        StorageBackend::File => Arc::new(FileSessionStore::new(&config.storage.session_dir)),
    };
    let recorder: Arc<dyn ConsultationRecorder> = match &config.storage.consultation_log {
        Some(path) => Arc::new(JsonLinesConsultationRecorder::new(path)),
        None => Arc::new(InMemoryConsultationRecorder::new()),
    };

    let send_message = SendMessageHandler::new(engine, Arc::clone(&sessions), recorder)
        .with_config(SendMessageConfig {
            record_anonymous: config.storage.record_anonymous,
        });
    let reset_session = ResetSessionHandler::new(sessions);

    let identity = match cli.user.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        Some(name) => SessionIdentity::authenticated(UserId::new(name)?, name),
        None => SessionIdentity::anonymous(),
    };

    run_console(&send_message, &reset_session, identity).await
}

/// Initialize tracing on stderr so the chat on stdout stays readable
fn init_tracing(runtime: &RuntimeConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| runtime.log_level.as_str().into());

    let fmt_layer = if runtime.json_logs() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

/// Training table, or an empty one when it cannot be read
fn load_reference(config: &AppConfig) -> ReferenceData {
    let path = config.data.training_path();
    match load_reference_file(&path) {
        Ok(data) => data,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Training table unavailable, no model will be loaded");
            ReferenceData::default()
        }
    }
}

async fn build_classifier(
    config: &AppConfig,
    reference: &ReferenceData,
) -> Result<Arc<dyn DiseaseClassifier>, Box<dyn std::error::Error>> {
    let classifier: Arc<dyn DiseaseClassifier> = match config.classifier.backend {
        ClassifierBackend::Local => Arc::new(LocalClassifier::train(reference)),
        ClassifierBackend::Remote => {
            // validate() guarantees the URL for the remote backend
            let url = config.classifier.remote_url.clone().unwrap_or_default();
            let remote_config =
                RemoteClassifierConfig::new(url).with_timeout(config.classifier.timeout());
            Arc::new(RemoteClassifier::new(remote_config, reference.schema().clone())?)
        }
    };

    match classifier.health().await {
        Ok(health) if health.model_loaded => {
            info!(classifier = classifier.name(), "Classifier ready");
        }
        Ok(_) => warn!(
            classifier = classifier.name(),
            "Classifier has no model loaded; predictions will fail"
        ),
        Err(e) => warn!(classifier = classifier.name(), error = %e, "Classifier health check failed"),
    }

    Ok(classifier)
}

async fn run_console(
    send_message: &SendMessageHandler,
    reset_session: &ResetSessionHandler,
    identity: SessionIdentity,
) -> Result<(), Box<dyn std::error::Error>> {
    let session_id = SessionId::new();
    info!(%session_id, authenticated = identity.is_authenticated(), "Session started");

    println!("Say hello to start. Type /reset to start over or /quit to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "/quit" => break,
            "/reset" => {
                reset_session.handle(ResetSessionCommand { session_id }).await?;
                println!("{ASSISTANT_NAME}: Starting over. Say hello when you are ready.");
                continue;
            }
            _ => {}
        }

        let cmd = SendMessageCommand::new(session_id, identity.clone(), line);
        match send_message.handle(cmd).await {
            Ok(result) => println!("{ASSISTANT_NAME}: {}", result.reply),
            Err(e) => {
                warn!(%session_id, code = %e.code(), error = %e, "Message failed");
                println!("{ASSISTANT_NAME}: Sorry, I can't make a prediction right now ({e}).");
            }
        }
    }

    info!(%session_id, "Session ended");
    Ok(())
}
