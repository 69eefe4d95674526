use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TerminologyCode
// ---------------------------------------------------------------------------

/// Opaque numeric identifier keying one entry in the terminology dictionary.
/// The join key between the matcher's span index and the concept table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TerminologyCode(pub u64);

impl TerminologyCode {
    /// Canonical CUI string for this code: `C` plus the code zero-padded to
    /// seven digits. Stable: equal codes always yield equal strings.
    pub fn as_cui(&self) -> String {
        format!("C{:07}", self.0)
    }
}

impl From<u64> for TerminologyCode {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TerminologyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_cui())
    }
}

// ---------------------------------------------------------------------------
// ConceptRecord — dictionary metadata for one entry
// ---------------------------------------------------------------------------

/// One terminology entry: primary CUI, optional preferred display text, and
/// a map from classification-scheme name to the codes the entry carries
/// under that scheme (may be empty). Immutable once constructed; malformed
/// records pass through unvalidated, upstream data quality is not this
/// crate's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRecord {
    pub cui: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_text: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub codes: BTreeMap<String, BTreeSet<String>>,
}

impl ConceptRecord {
    pub fn new(cui: impl Into<String>) -> Self {
        Self {
            cui: cui.into(),
            preferred_text: None,
            codes: BTreeMap::new(),
        }
    }

    pub fn add_code(&mut self, scheme: &str, code: &str) {
        self.codes
            .entry(scheme.to_string())
            .or_default()
            .insert(code.to_string());
    }

    /// Classification codes under one scheme, if the entry carries any.
    pub fn codes_for(&self, scheme: &str) -> Option<&BTreeSet<String>> {
        self.codes.get(scheme)
    }
}

// ---------------------------------------------------------------------------
// ResolvedConcept — a concept as attached to an emitted mention
// ---------------------------------------------------------------------------

/// A concept reference attached to a mention annotation. Equality and
/// hashing cover (coding scheme, CUI, TUI) only: preferred text must never
/// split the dedup when two sources describe the same concept differently.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct ResolvedConcept {
    pub coding_scheme: String,
    pub cui: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tui: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_text: Option<String>,
}

impl ResolvedConcept {
    /// Minimal record synthesized when a code has no dictionary metadata.
    /// Deterministic: the CUI is derived from the code alone.
    pub fn synthesized(coding_scheme: &str, code: TerminologyCode) -> Self {
        Self {
            coding_scheme: coding_scheme.to_string(),
            cui: code.as_cui(),
            tui: None,
            preferred_text: None,
        }
    }
}

impl PartialEq for ResolvedConcept {
    fn eq(&self, other: &Self) -> bool {
        self.coding_scheme == other.coding_scheme
            && self.cui == other.cui
            && self.tui == other.tui
    }
}

impl Hash for ResolvedConcept {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coding_scheme.hash(state);
        self.cui.hash(state);
        self.tui.hash(state);
    }
}
