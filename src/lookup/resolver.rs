use std::collections::HashSet;

use crate::config::{ConsumerConfig, UncodedPolicy, TUI_SCHEME};
use crate::models::concept::{ResolvedConcept, TerminologyCode};
use crate::models::enums::SemanticGroup;

use super::semantic::semantic_group_of;
use super::types::ConceptSource;

/// Resolve one terminology code against the requested group.
///
/// A code without dictionary metadata synthesizes a single minimal record.
/// A record carrying semantic-type codes keeps only the codes classifying
/// to the requested group, one emitted clone per surviving code; a record
/// carrying none follows the uncoded policy. The returned set is
/// deduplicated by (scheme, CUI, TUI) value equality.
pub fn resolve(
    code: TerminologyCode,
    group: SemanticGroup,
    concepts: &impl ConceptSource,
    config: &ConsumerConfig,
) -> HashSet<ResolvedConcept> {
    let mut resolved = HashSet::new();

    let records = match concepts.lookup(code) {
        Some(records) if !records.is_empty() => records,
        _ => {
            tracing::debug!(code = %code, "No metadata for code, synthesizing minimal concept");
            resolved.insert(ResolvedConcept::synthesized(&config.coding_scheme, code));
            return resolved;
        }
    };

    for record in records {
        match record.codes_for(TUI_SCHEME) {
            Some(tuis) if !tuis.is_empty() => {
                // The record may carry semantic types outside the requested
                // group; only the matching ones surface here.
                for tui in tuis {
                    if semantic_group_of(tui) == Some(group) {
                        resolved.insert(ResolvedConcept {
                            coding_scheme: config.coding_scheme.clone(),
                            cui: record.cui.clone(),
                            tui: Some(tui.clone()),
                            preferred_text: record.preferred_text.clone(),
                        });
                    }
                }
            }
            _ => {
                let include = match config.uncoded_policy {
                    UncodedPolicy::Permissive => true,
                    UncodedPolicy::EntityOnly => group == SemanticGroup::Entity,
                };
                if include {
                    resolved.insert(ResolvedConcept {
                        coding_scheme: config.coding_scheme.clone(),
                        cui: record.cui.clone(),
                        tui: None,
                        preferred_text: record.preferred_text.clone(),
                    });
                }
            }
        }
    }

    resolved
}
