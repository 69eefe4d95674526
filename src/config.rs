use serde::{Deserialize, Serialize};

/// Discovery-technique marker carried by every emitted mention.
pub const DICTIONARY_LOOKUP: &str = "dictionary lookup";

/// Coding scheme label attached to resolved concepts, including the minimal
/// records synthesized when a code has no dictionary metadata.
pub const DEFAULT_CODING_SCHEME: &str = "SNOMEDCT_US";

/// Name of the classification scheme holding semantic-type codes.
pub const TUI_SCHEME: &str = "TUI";

/// Inclusion policy for concepts that carry no semantic-type codes at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UncodedPolicy {
    /// Metadata-free concepts surface for every requested group.
    Permissive,
    /// Metadata-free concepts surface only for the generic entity group.
    EntityOnly,
}

/// Settings for one consumption pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumerConfig {
    pub coding_scheme: String,
    pub uncoded_policy: UncodedPolicy,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            coding_scheme: DEFAULT_CODING_SCHEME.to_string(),
            uncoded_policy: UncodedPolicy::Permissive,
        }
    }
}
