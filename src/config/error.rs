//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Log filter directive is empty")]
    EmptyLogLevel,

    #[error("Invalid classifier timeout (1-300 seconds)")]
    InvalidTimeout,

    #[error("Remote classifier URL must use http or https")]
    InvalidRemoteUrl,

    #[error("Match threshold must be in (0, 1]")]
    InvalidThreshold,

    #[error("Candidate limit must be at least 1")]
    InvalidCandidateLimit,

    #[error("Clarifying question cap must be between 1 and 10")]
    InvalidClarifyingLimit,
}
