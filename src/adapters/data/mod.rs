//! Data Adapters
//!
//! Loaders for the CSV tables the assistant is built from.
//!
//! - **reference_loader** - Training table (symptom columns plus `prognosis`)
//! - **knowledge_loader** - Condition descriptions, precautions, and symptom severity

mod knowledge_loader;
mod reference_loader;

pub use knowledge_loader::{load_knowledge, load_knowledge_files, KnowledgeFiles};
pub use reference_loader::{load_reference_data, load_reference_file, LABEL_COLUMN};

use thiserror::Error;

/// Errors raised while loading data tables.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    #[error("training table has no '{0}' column")]
    MissingLabelColumn(String),

    #[error("training table has no symptom columns")]
    NoSymptomColumns,
}
