use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TUI_SCHEME;
use crate::lookup::types::ConceptSource;
use crate::models::concept::{ConceptRecord, TerminologyCode};

#[derive(Error, Debug)]
pub enum TerminologyError {
    #[error("Concept table load failed ({0}): {1}")]
    Load(String, String),

    #[error("Concept table parse failed ({0}): {1}")]
    Parse(String, String),

    #[error("Invalid {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// One line of the concept metadata file: the code plus its record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConceptEntry {
    code: TerminologyCode,
    #[serde(flatten)]
    record: ConceptRecord,
}

/// In-memory concept metadata table; the crate's default `ConceptSource`.
/// A code may carry several records (one per source vocabulary row).
#[derive(Debug, Clone, Default)]
pub struct ConceptTable {
    concepts: HashMap<TerminologyCode, Vec<ConceptRecord>>,
}

impl ConceptTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: TerminologyCode, record: ConceptRecord) {
        self.concepts.entry(code).or_default().push(record);
    }

    /// Load a concept table from a JSON entry file.
    pub fn load(path: &Path) -> Result<Self, TerminologyError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| TerminologyError::Load(path.display().to_string(), e.to_string()))?;
        let entries: Vec<ConceptEntry> = serde_json::from_str(&json)
            .map_err(|e| TerminologyError::Parse(path.display().to_string(), e.to_string()))?;

        let mut table = Self::new();
        for entry in entries {
            table.insert(entry.code, entry.record);
        }

        tracing::info!(
            path = %path.display(),
            codes = table.len(),
            "Concept table loaded"
        );
        Ok(table)
    }

    /// Create a small concept table for tests (no file I/O).
    pub fn load_test() -> Self {
        let mut table = Self::new();

        let mut aspirin = ConceptRecord::new("C0004057");
        aspirin.preferred_text = Some("aspirin".into());
        aspirin.add_code(TUI_SCHEME, "T109");
        aspirin.add_code(TUI_SCHEME, "T121");
        table.insert(TerminologyCode(42), aspirin);

        let mut diabetes = ConceptRecord::new("C0011849");
        diabetes.preferred_text = Some("diabetes mellitus".into());
        diabetes.add_code(TUI_SCHEME, "T047");
        table.insert(TerminologyCode(100), diabetes);

        let mut abdomen = ConceptRecord::new("C0000726");
        abdomen.preferred_text = Some("abdomen".into());
        abdomen.add_code(TUI_SCHEME, "T029");
        table.insert(TerminologyCode(55), abdomen);

        // Spans two groups: pharmacologic substance and lab procedure.
        let mut glucose = ConceptRecord::new("C0017725");
        glucose.preferred_text = Some("glucose".into());
        glucose.add_code(TUI_SCHEME, "T109");
        glucose.add_code(TUI_SCHEME, "T059");
        table.insert(TerminologyCode(61), glucose);

        // No classification metadata at all.
        let mut metformin = ConceptRecord::new("C0025598");
        metformin.preferred_text = Some("metformin".into());
        table.insert(TerminologyCode(77), metformin);

        table
    }

    /// Number of distinct codes in the table.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

impl ConceptSource for ConceptTable {
    fn lookup(&self, code: TerminologyCode) -> Option<&[ConceptRecord]> {
        self.concepts.get(&code).map(|records| records.as_slice())
    }
}
