use std::collections::HashSet;
use std::time::Instant;

use crate::config::ConsumerConfig;
use crate::models::annotation::MentionAnnotation;
use crate::models::enums::SemanticGroup;

use super::resolver;
use super::types::{AnnotationSink, ConceptSource, ConsumeError, SpanCodeMap};

/// Consumes one document's dictionary-matcher hits for one semantic group.
pub struct TermConsumer {
    config: ConsumerConfig,
}

impl TermConsumer {
    pub fn new(config: ConsumerConfig) -> Self {
        Self { config }
    }

    /// Emit exactly one mention per span in `spans` for `group`.
    ///
    /// Accumulation is span-local, merged only through the sink. A span
    /// whose codes all resolve to empty concept sets still yields a mention
    /// with an empty set. An invalid span or a sink rejection aborts the
    /// pass for this document; no partial retry. Returns the number of
    /// mentions emitted.
    pub fn consume(
        &self,
        group: SemanticGroup,
        spans: &SpanCodeMap,
        concepts: &impl ConceptSource,
        sink: &impl AnnotationSink,
    ) -> Result<usize, ConsumeError> {
        let start = Instant::now();
        let mut emitted = 0usize;

        for (span, codes) in spans.iter() {
            if !span.is_valid() {
                return Err(ConsumeError::InvalidSpan {
                    start: span.start,
                    end: span.end,
                });
            }

            let mut accumulated = HashSet::new();
            for code in codes {
                accumulated.extend(resolver::resolve(*code, group, concepts, &self.config));
            }

            tracing::debug!(
                span = %span,
                group = group.as_str(),
                concepts = accumulated.len(),
                "Span resolved"
            );

            sink.accept(MentionAnnotation::new(*span, group, accumulated))?;
            emitted += 1;
        }

        tracing::info!(
            group = group.as_str(),
            spans = spans.len(),
            mentions = emitted,
            processing_ms = start.elapsed().as_millis() as u64,
            "Consumption pass complete"
        );

        Ok(emitted)
    }
}

impl Default for TermConsumer {
    fn default() -> Self {
        Self::new(ConsumerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::config::TUI_SCHEME;
    use crate::lookup::sink::DocumentAnnotations;
    use crate::lookup::types::SinkError;
    use crate::models::concept::{ConceptRecord, TerminologyCode};
    use crate::models::span::TextSpan;
    use crate::terminology::ConceptTable;

    fn record(cui: &str, tuis: &[&str]) -> ConceptRecord {
        let mut record = ConceptRecord::new(cui);
        for tui in tuis {
            record.add_code(TUI_SCHEME, tui);
        }
        record
    }

    /// Span [10,15) with codes {7, 42}: 7 has no metadata, 42 is C001/T047
    /// (disorder). The Disorder pass yields both records; the Drug pass
    /// yields only the synthesized record for 7.
    #[test]
    fn mixed_span_resolves_per_group() {
        let mut table = ConceptTable::new();
        table.insert(TerminologyCode(42), record("C001", &["T047"]));

        let mut spans = SpanCodeMap::new();
        let span = TextSpan::new(10, 15);
        spans.insert(span, TerminologyCode(7));
        spans.insert(span, TerminologyCode(42));

        let consumer = TermConsumer::default();

        let sink = DocumentAnnotations::new(Uuid::new_v4());
        consumer
            .consume(SemanticGroup::Disorder, &spans, &table, &sink)
            .unwrap();
        let mentions = sink.annotations().unwrap();
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].span, span);
        assert_eq!(mentions[0].concepts.len(), 2);
        let cuis: Vec<&str> = mentions[0].concepts.iter().map(|c| c.cui.as_str()).collect();
        assert!(cuis.contains(&"C0000007"));
        assert!(cuis.contains(&"C001"));
        let tagged = mentions[0].concepts.iter().find(|c| c.cui == "C001").unwrap();
        assert_eq!(tagged.tui.as_deref(), Some("T047"));

        let sink = DocumentAnnotations::new(Uuid::new_v4());
        consumer
            .consume(SemanticGroup::Drug, &spans, &table, &sink)
            .unwrap();
        let mentions = sink.annotations().unwrap();
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].concepts.len(), 1);
        assert_eq!(mentions[0].concepts[0].cui, "C0000007");
    }

    /// Every span present in the index yields exactly one mention.
    #[test]
    fn one_mention_per_span() {
        let table = ConceptTable::load_test();
        let mut spans = SpanCodeMap::new();
        spans.insert(TextSpan::new(0, 7), TerminologyCode(42));
        spans.insert(TextSpan::new(12, 20), TerminologyCode(100));
        spans.insert(TextSpan::new(30, 37), TerminologyCode(9999));

        let consumer = TermConsumer::default();
        let sink = DocumentAnnotations::new(Uuid::new_v4());
        let emitted = consumer
            .consume(SemanticGroup::Drug, &spans, &table, &sink)
            .unwrap();

        assert_eq!(emitted, 3);
        assert_eq!(sink.len(), 3);
        let mentions = sink.annotations().unwrap();
        let unique_spans: std::collections::HashSet<_> =
            mentions.iter().map(|m| m.span).collect();
        assert_eq!(unique_spans.len(), 3);
    }

    /// A span whose codes all fail the group filter still annotates, with
    /// an empty concept set.
    #[test]
    fn filtered_out_span_still_annotates() {
        let mut table = ConceptTable::new();
        table.insert(TerminologyCode(100), record("C0011849", &["T047"]));

        let mut spans = SpanCodeMap::new();
        spans.insert(TextSpan::new(5, 13), TerminologyCode(100));

        let consumer = TermConsumer::default();
        let sink = DocumentAnnotations::new(Uuid::new_v4());
        consumer
            .consume(SemanticGroup::Drug, &spans, &table, &sink)
            .unwrap();

        let mentions = sink.annotations().unwrap();
        assert_eq!(mentions.len(), 1);
        assert!(mentions[0].concepts.is_empty());
    }

    /// Two distinct codes resolving to value-equal concepts dedup to one.
    #[test]
    fn dedup_across_codes_at_one_span() {
        let mut table = ConceptTable::new();
        table.insert(TerminologyCode(1), record("C0004057", &["T121"]));
        table.insert(TerminologyCode(2), record("C0004057", &["T121"]));

        let mut spans = SpanCodeMap::new();
        let span = TextSpan::new(4, 11);
        spans.insert(span, TerminologyCode(1));
        spans.insert(span, TerminologyCode(2));

        let consumer = TermConsumer::default();
        let sink = DocumentAnnotations::new(Uuid::new_v4());
        consumer
            .consume(SemanticGroup::Drug, &spans, &table, &sink)
            .unwrap();

        let mentions = sink.annotations().unwrap();
        assert_eq!(mentions[0].concepts.len(), 1);
    }

    /// Running consume twice with fresh sinks produces element-wise equal
    /// annotation sets.
    #[test]
    fn consume_is_idempotent() {
        let table = ConceptTable::load_test();
        let mut spans = SpanCodeMap::new();
        spans.insert(TextSpan::new(0, 7), TerminologyCode(42));
        spans.insert(TextSpan::new(12, 20), TerminologyCode(61));
        spans.insert(TextSpan::new(25, 33), TerminologyCode(77));

        let consumer = TermConsumer::default();

        let first = DocumentAnnotations::new(Uuid::new_v4());
        consumer
            .consume(SemanticGroup::Drug, &spans, &table, &first)
            .unwrap();
        let second = DocumentAnnotations::new(Uuid::new_v4());
        consumer
            .consume(SemanticGroup::Drug, &spans, &table, &second)
            .unwrap();

        let first = first.annotations().unwrap();
        let second = second.annotations().unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.span, b.span);
            assert_eq!(a.group, b.group);
            assert_eq!(a.concepts, b.concepts);
        }
    }

    /// Every attached concept either has no TUI or a TUI classifying to the
    /// mention's group.
    #[test]
    fn attached_concepts_respect_group() {
        use crate::lookup::semantic::semantic_group_of;

        let table = ConceptTable::load_test();
        let mut spans = SpanCodeMap::new();
        spans.insert(TextSpan::new(0, 7), TerminologyCode(42));
        spans.insert(TextSpan::new(12, 20), TerminologyCode(61));
        spans.insert(TextSpan::new(25, 33), TerminologyCode(77));

        let consumer = TermConsumer::default();
        for group in SemanticGroup::ALL {
            let sink = DocumentAnnotations::new(Uuid::new_v4());
            consumer.consume(group, &spans, &table, &sink).unwrap();
            for mention in sink.annotations().unwrap() {
                for concept in &mention.concepts {
                    match &concept.tui {
                        Some(tui) => assert_eq!(semantic_group_of(tui), Some(group)),
                        None => {}
                    }
                }
            }
        }
    }

    /// An invalid span fails the pass fast with the offending offsets.
    #[test]
    fn invalid_span_aborts_pass() {
        let table = ConceptTable::load_test();
        let mut spans = SpanCodeMap::new();
        spans.insert(TextSpan::new(9, 9), TerminologyCode(42));

        let consumer = TermConsumer::default();
        let sink = DocumentAnnotations::new(Uuid::new_v4());
        let result = consumer.consume(SemanticGroup::Drug, &spans, &table, &sink);

        match result.unwrap_err() {
            ConsumeError::InvalidSpan { start, end } => {
                assert_eq!((start, end), (9, 9));
            }
            other => panic!("Expected InvalidSpan, got: {:?}", other),
        }
        assert!(sink.is_empty());
    }

    /// A sink rejection surfaces to the caller and stops the pass.
    #[test]
    fn sink_rejection_aborts_pass() {
        let table = ConceptTable::load_test();
        let mut spans = SpanCodeMap::new();
        spans.insert(TextSpan::new(0, 7), TerminologyCode(42));
        spans.insert(TextSpan::new(12, 50), TerminologyCode(100));
        spans.insert(TextSpan::new(60, 68), TerminologyCode(77));

        let consumer = TermConsumer::default();
        let sink = DocumentAnnotations::with_length(Uuid::new_v4(), 40);
        let result = consumer.consume(SemanticGroup::Drug, &spans, &table, &sink);

        match result.unwrap_err() {
            ConsumeError::Sink(SinkError::SpanOutOfBounds { end, doc_len, .. }) => {
                assert_eq!(end, 50);
                assert_eq!(doc_len, 40);
            }
            other => panic!("Expected SpanOutOfBounds, got: {:?}", other),
        }
        // The pass stopped at the rejected span; later spans never emitted.
        assert_eq!(sink.len(), 1);
    }

    /// An empty span index emits nothing and succeeds.
    #[test]
    fn empty_index_emits_nothing() {
        let table = ConceptTable::load_test();
        let consumer = TermConsumer::default();
        let sink = DocumentAnnotations::new(Uuid::new_v4());
        let emitted = consumer
            .consume(SemanticGroup::Drug, &SpanCodeMap::new(), &table, &sink)
            .unwrap();
        assert_eq!(emitted, 0);
        assert!(sink.is_empty());
    }
}
