//! Condition knowledge loader.
//!
//! Three header-less tables feed the knowledge base:
//!
//! - descriptions: `condition,description`
//! - precautions: `condition,p1,p2,p3,p4`
//! - severity weights: `symptom,weight`
//!
//! A header row, if present, is skipped like any other row that does not fit.
//! Unreadable rows (bad encoding, broken quoting) are skipped one at a time.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::DataLoadError;
use crate::domain::knowledge::KnowledgeBase;
use crate::domain::symptoms::SymptomId;

/// Locations of the knowledge tables.
#[derive(Debug, Clone)]
pub struct KnowledgeFiles {
    pub descriptions: PathBuf,
    pub precautions: PathBuf,
    pub severity: PathBuf,
}

/// Loads the knowledge tables from disk.
///
/// A missing table leaves that part of the knowledge base empty; the report
/// falls back to its defaults.
pub fn load_knowledge_files(files: &KnowledgeFiles) -> Result<KnowledgeBase, DataLoadError> {
    let mut knowledge = KnowledgeBase::new();

    if let Some(file) = open_optional(&files.descriptions)? {
        read_descriptions(file, &mut knowledge)?;
    }
    if let Some(file) = open_optional(&files.precautions)? {
        read_precautions(file, &mut knowledge)?;
    }
    if let Some(file) = open_optional(&files.severity)? {
        read_severity(file, &mut knowledge)?;
    }

    let (descriptions, precautions, severity) = knowledge.sizes();
    info!(descriptions, precautions, severity, "Loaded condition knowledge");
    Ok(knowledge)
}

/// Loads the knowledge tables from readers.
pub fn load_knowledge<D, P, S>(
    descriptions: D,
    precautions: P,
    severity: S,
) -> Result<KnowledgeBase, DataLoadError>
where
    D: io::Read,
    P: io::Read,
    S: io::Read,
{
    let mut knowledge = KnowledgeBase::new();
    read_descriptions(descriptions, &mut knowledge)?;
    read_precautions(precautions, &mut knowledge)?;
    read_severity(severity, &mut knowledge)?;
    Ok(knowledge)
}

fn open_optional(path: &Path) -> Result<Option<File>, DataLoadError> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Knowledge table not found, skipping");
            Ok(None)
        }
        Err(source) => Err(DataLoadError::Open {
            path: path.display().to_string(),
            source,
        }),
    }
}

fn table<R: io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn readable(record: csv::Result<csv::StringRecord>, table: &str) -> Option<csv::StringRecord> {
    match record {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(table, error = %e, "Skipping unreadable knowledge row");
            None
        }
    }
}

fn read_descriptions<R: io::Read>(
    reader: R,
    knowledge: &mut KnowledgeBase,
) -> Result<(), DataLoadError> {
    for record in table(reader).records() {
        let Some(record) = readable(record, "descriptions") else {
            continue;
        };
        if record.len() < 2 {
            continue;
        }
        knowledge.add_description(&record[0], &record[1]);
    }
    Ok(())
}

fn read_precautions<R: io::Read>(
    reader: R,
    knowledge: &mut KnowledgeBase,
) -> Result<(), DataLoadError> {
    for record in table(reader).records() {
        let Some(record) = readable(record, "precautions") else {
            continue;
        };
        if record.len() < 5 {
            continue;
        }
        knowledge.add_precautions(&record[0], record.iter().skip(1).take(4));
    }
    Ok(())
}

fn read_severity<R: io::Read>(reader: R, knowledge: &mut KnowledgeBase) -> Result<(), DataLoadError> {
    for record in table(reader).records() {
        let Some(record) = readable(record, "severity") else {
            continue;
        };
        if record.len() < 2 {
            continue;
        }
        let Ok(weight) = record[1].parse::<u32>() else {
            continue;
        };
        // severity files sometimes carry stray spaces inside names
        let name: String = record[0].split_whitespace().collect::<Vec<_>>().join("");
        if let Ok(symptom) = SymptomId::new(name) {
            knowledge.add_severity(symptom, weight);
        }
    }
    Ok(())
}
