pub mod config;
pub mod lookup; // span/code hit consumption: classify, resolve, dispatch, emit
pub mod models;
pub mod terminology; // concept metadata table + loader

pub use config::{ConsumerConfig, UncodedPolicy};
pub use lookup::consumer::TermConsumer;
pub use lookup::semantic::semantic_group_of;
pub use lookup::sink::DocumentAnnotations;
pub use lookup::types::{AnnotationSink, ConceptSource, ConsumeError, SinkError, SpanCodeMap};
pub use models::annotation::{MentionAnnotation, MentionKind};
pub use models::concept::{ConceptRecord, ResolvedConcept, TerminologyCode};
pub use models::enums::SemanticGroup;
pub use models::span::TextSpan;
pub use terminology::{ConceptTable, TerminologyError};
