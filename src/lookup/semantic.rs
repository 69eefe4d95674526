use crate::models::enums::SemanticGroup;

/// Map a UMLS semantic-type code to its coarse group.
/// Pure and total over the known TUI table; unknown codes yield `None`,
/// which callers treat as "not in the requested group", never as the
/// generic `Entity` fallback.
pub fn semantic_group_of(tui: &str) -> Option<SemanticGroup> {
    match tui {
        // Anatomy
        "T021" | "T022" | "T023" | "T024" | "T025" | "T026" | "T029" | "T030" => {
            Some(SemanticGroup::AnatomicalSite)
        }
        // Diseases and disorders
        "T019" | "T020" | "T037" | "T047" | "T048" | "T049" | "T050" | "T190" | "T191" => {
            Some(SemanticGroup::Disorder)
        }
        // Findings, signs and symptoms
        "T033" | "T040" | "T041" | "T042" | "T043" | "T044" | "T045" | "T046" | "T056"
        | "T057" | "T184" => Some(SemanticGroup::Finding),
        // Laboratory
        "T034" | "T059" => Some(SemanticGroup::Lab),
        // Procedures
        "T060" | "T061" => Some(SemanticGroup::Procedure),
        // Chemicals and drugs
        "T109" | "T110" | "T114" | "T115" | "T116" | "T118" | "T119" | "T121" | "T122"
        | "T123" | "T124" | "T125" | "T126" | "T127" | "T129" | "T130" | "T131" | "T195"
        | "T196" | "T197" | "T200" | "T203" => Some(SemanticGroup::Drug),
        _ => None,
    }
}
