//! Training table loader.
//!
//! The header row names the symptom columns and a `prognosis` label column.
//! Column names exported with duplicate suffixes (`itching.1`) are folded back
//! to their base name and only the first such column is kept.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use super::DataLoadError;
use crate::domain::diagnosis::{FeatureVector, LabelledRow, ReferenceData, SymptomSchema};
use crate::domain::symptoms::SymptomId;

/// Name of the condition label column.
pub const LABEL_COLUMN: &str = "prognosis";

static DUPLICATE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.\d+$").expect("suffix pattern is valid"));

/// Reads the training table from a file.
pub fn load_reference_file(path: &Path) -> Result<ReferenceData, DataLoadError> {
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let data = load_reference_data(file)?;
    info!(
        path = %path.display(),
        symptoms = data.schema().len(),
        rows = data.rows().len(),
        "Loaded training table"
    );
    Ok(data)
}

/// Reads the training table. Malformed rows are skipped with a warning.
pub fn load_reference_data<R: io::Read>(reader: R) -> Result<ReferenceData, DataLoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    let label_index = headers
        .iter()
        .position(|h| h == LABEL_COLUMN)
        .ok_or_else(|| DataLoadError::MissingLabelColumn(LABEL_COLUMN.to_string()))?;

    // (column index, symptom id) for every kept feature column
    let mut seen = HashSet::new();
    let mut columns: Vec<(usize, SymptomId)> = Vec::new();
    for (index, header) in headers.iter().enumerate() {
        if index == label_index {
            continue;
        }
        let base = DUPLICATE_SUFFIX.replace(header, "");
        let Ok(id) = SymptomId::new(base.as_ref()) else {
            continue;
        };
        if seen.insert(id.clone()) {
            columns.push((index, id));
        }
    }
    if columns.is_empty() {
        return Err(DataLoadError::NoSymptomColumns);
    }

    let schema = SymptomSchema::new(columns.iter().map(|(_, id)| id.clone()));
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (line, record) in csv.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!(row = line + 1, error = %e, "Skipping unreadable training row");
                skipped += 1;
                continue;
            }
        };

        if record.len() != headers.len() {
            warn!(
                row = line + 1,
                cells = record.len(),
                expected = headers.len(),
                "Skipping training row with wrong width"
            );
            skipped += 1;
            continue;
        }

        let condition = record.get(label_index).unwrap_or_default();
        if condition.is_empty() {
            warn!(row = line + 1, "Skipping training row without a label");
            skipped += 1;
            continue;
        }

        let flags: Option<Vec<u8>> = columns
            .iter()
            .map(|(index, _)| match record.get(*index) {
                Some("0") => Some(0),
                Some("1") => Some(1),
                _ => None,
            })
            .collect();
        let Some(flags) = flags else {
            warn!(row = line + 1, "Skipping training row with non-binary cells");
            skipped += 1;
            continue;
        };

        rows.push(LabelledRow {
            features: FeatureVector::from_flags(flags),
            condition: condition.to_string(),
        });
    }

    if skipped > 0 {
        warn!(skipped, kept = rows.len(), "Training table had malformed rows");
    }

    Ok(ReferenceData::new(schema, rows))
}
