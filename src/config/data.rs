//! Reference data configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Locations of the reference tables
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding the tables
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Training table: symptom columns plus `prognosis`
    #[serde(default = "default_training_file")]
    pub training_file: String,

    #[serde(default = "default_descriptions_file")]
    pub descriptions_file: String,

    #[serde(default = "default_precautions_file")]
    pub precautions_file: String,

    #[serde(default = "default_severity_file")]
    pub severity_file: String,
}

impl DataConfig {
    pub fn training_path(&self) -> PathBuf {
        self.dir.join(&self.training_file)
    }

    pub fn descriptions_path(&self) -> PathBuf {
        self.dir.join(&self.descriptions_file)
    }

    pub fn precautions_path(&self) -> PathBuf {
        self.dir.join(&self.precautions_file)
    }

    pub fn severity_path(&self) -> PathBuf {
        self.dir.join(&self.severity_file)
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            training_file: default_training_file(),
            descriptions_file: default_descriptions_file(),
            precautions_file: default_precautions_file(),
            severity_file: default_severity_file(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_training_file() -> String {
    "Training.csv".to_string()
}

fn default_descriptions_file() -> String {
    "symptom_Description.csv".to_string()
}

fn default_precautions_file() -> String {
    "symptom_precaution.csv".to_string()
}

fn default_severity_file() -> String {
    "Symptom_severity.csv".to_string()
}
