use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::models::annotation::MentionAnnotation;
use crate::models::concept::{ConceptRecord, TerminologyCode};
use crate::models::span::TextSpan;

// ---------------------------------------------------------------------------
// Collaborator seams
// ---------------------------------------------------------------------------

/// Source of concept metadata: code -> records. Absence is a valid outcome,
/// handled by synthesis in the resolver.
pub trait ConceptSource {
    fn lookup(&self, code: TerminologyCode) -> Option<&[ConceptRecord]>;
}

/// Receives finished mentions for one document. Implementations must accept
/// insertion through `&self` (interior synchronization) so emission stays
/// safe when span resolution is parallelized. A rejection aborts the
/// consumption pass for the current document; no per-span retry.
pub trait AnnotationSink {
    fn accept(&self, annotation: MentionAnnotation) -> Result<(), SinkError>;
}

// ---------------------------------------------------------------------------
// SpanCodeMap — one document's matcher hits
// ---------------------------------------------------------------------------

/// Span -> codes index for one document, as handed over by the dictionary
/// matcher. BTreeMap keeps span iteration deterministic.
#[derive(Debug, Clone, Default)]
pub struct SpanCodeMap {
    spans: BTreeMap<TextSpan, BTreeSet<TerminologyCode>>,
}

impl SpanCodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, span: TextSpan, code: TerminologyCode) {
        self.spans.entry(span).or_default().insert(code);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TextSpan, &BTreeSet<TerminologyCode>)> {
        self.spans.iter()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Span [{start}, {end}) exceeds document length {doc_len}")]
    SpanOutOfBounds {
        start: usize,
        end: usize,
        doc_len: usize,
    },

    #[error("Internal lock failed")]
    LockFailed,
}

#[derive(Error, Debug)]
pub enum ConsumeError {
    #[error("Invalid span [{start}, {end}): start must be below end")]
    InvalidSpan { start: usize, end: usize },

    #[error("Annotation sink rejected a mention: {0}")]
    Sink(#[from] SinkError),
}
