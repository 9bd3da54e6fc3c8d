//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SYMPTOM_INTAKE` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a runnable setup.
//!
//! # Example
//!
//! ```no_run
//! use symptom_intake::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Training table at {}", config.data.training_path().display());
//! ```

mod classifier;
mod conversation;
mod data;
mod error;
mod matching;
mod runtime;
mod storage;

pub use classifier::{ClassifierBackend, ClassifierConfig};
pub use conversation::ConversationConfig;
pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use matching::MatchingConfig;
pub use runtime::{Environment, LogFormat, RuntimeConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

use crate::domain::conversation::ConversationEngineConfig;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment and logging
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Reference table locations
    #[serde(default)]
    pub data: DataConfig,

    /// Local model or remote prediction service
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Approximate symptom matching
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Intake flow switches
    #[serde(default)]
    pub conversation: ConversationConfig,

    /// Session state and consultation log
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SYMPTOM_INTAKE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SYMPTOM_INTAKE__CLASSIFIER__BACKEND=remote` -> `classifier.backend = remote`
    /// - `SYMPTOM_INTAKE__MATCHING__THRESHOLD=0.85` -> `matching.threshold = 0.85`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SYMPTOM_INTAKE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        self.classifier.validate()?;
        self.matching.validate()?;
        self.conversation.validate()?;
        Ok(())
    }

    /// Engine switches drawn from the conversation and storage sections
    pub fn engine_config(&self) -> ConversationEngineConfig {
        ConversationEngineConfig {
            greeting_resets_mid_flow: self.conversation.greeting_resets_mid_flow,
            anonymous_consultations_saved: self.storage.record_anonymous,
        }
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.runtime.is_production()
    }
}
