use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config;

use super::concept::ResolvedConcept;
use super::enums::SemanticGroup;
use super::span::TextSpan;

// ---------------------------------------------------------------------------
// MentionKind — the concrete annotation variant per semantic group
// ---------------------------------------------------------------------------

/// The concrete mention variant emitted for each semantic group. Closed set;
/// extending `SemanticGroup` forces the `for_group` match to be extended with
/// it, and `dispatch_is_total` keeps the two in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MentionKind {
    Medication,
    AnatomicalSite,
    DiseaseDisorder,
    SignSymptom,
    Lab,
    Procedure,
    Entity,
}

impl MentionKind {
    /// Total dispatch from group to output variant. `Entity` is the variant
    /// for the generic fallback group.
    pub fn for_group(group: SemanticGroup) -> MentionKind {
        match group {
            SemanticGroup::Drug => MentionKind::Medication,
            SemanticGroup::AnatomicalSite => MentionKind::AnatomicalSite,
            SemanticGroup::Disorder => MentionKind::DiseaseDisorder,
            SemanticGroup::Finding => MentionKind::SignSymptom,
            SemanticGroup::Lab => MentionKind::Lab,
            SemanticGroup::Procedure => MentionKind::Procedure,
            SemanticGroup::Entity => MentionKind::Entity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medication => "medication_mention",
            Self::AnatomicalSite => "anatomical_site_mention",
            Self::DiseaseDisorder => "disease_disorder_mention",
            Self::SignSymptom => "sign_symptom_mention",
            Self::Lab => "lab_mention",
            Self::Procedure => "procedure_mention",
            Self::Entity => "entity_mention",
        }
    }
}

// ---------------------------------------------------------------------------
// MentionAnnotation
// ---------------------------------------------------------------------------

/// One emitted mention. Exactly one is created per (span, group) pair the
/// consumer processes; never mutated after creation, ownership passes to
/// the sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentionAnnotation {
    pub span: TextSpan,
    pub group: SemanticGroup,
    pub kind: MentionKind,
    pub discovery_technique: String,
    /// Duplicate-free by construction; sorted for deterministic output.
    pub concepts: Vec<ResolvedConcept>,
}

impl MentionAnnotation {
    pub fn new(span: TextSpan, group: SemanticGroup, concepts: HashSet<ResolvedConcept>) -> Self {
        let mut concepts: Vec<ResolvedConcept> = concepts.into_iter().collect();
        concepts.sort_by(|a, b| {
            (&a.coding_scheme, &a.cui, &a.tui).cmp(&(&b.coding_scheme, &b.cui, &b.tui))
        });
        Self {
            span,
            group,
            kind: MentionKind::for_group(group),
            discovery_technique: config::DICTIONARY_LOOKUP.to_string(),
            concepts,
        }
    }
}
