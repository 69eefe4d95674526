use std::sync::RwLock;

use uuid::Uuid;

use crate::models::annotation::MentionAnnotation;
use crate::models::enums::SemanticGroup;

use super::types::{AnnotationSink, SinkError};

/// In-memory mention sink for one document, backed by RwLock so emission
/// stays safe when span resolution runs concurrently. When constructed with
/// a document length, mentions ending past it are rejected.
pub struct DocumentAnnotations {
    pub document_id: Uuid,
    doc_len: Option<usize>,
    mentions: RwLock<Vec<MentionAnnotation>>,
}

impl DocumentAnnotations {
    pub fn new(document_id: Uuid) -> Self {
        Self {
            document_id,
            doc_len: None,
            mentions: RwLock::new(Vec::new()),
        }
    }

    /// Sink that rejects mentions whose end offset exceeds `doc_len`.
    pub fn with_length(document_id: Uuid, doc_len: usize) -> Self {
        Self {
            document_id,
            doc_len: Some(doc_len),
            mentions: RwLock::new(Vec::new()),
        }
    }

    pub fn annotations(&self) -> Result<Vec<MentionAnnotation>, SinkError> {
        Ok(self
            .mentions
            .read()
            .map_err(|_| SinkError::LockFailed)?
            .clone())
    }

    pub fn annotations_for(
        &self,
        group: SemanticGroup,
    ) -> Result<Vec<MentionAnnotation>, SinkError> {
        let mentions = self.mentions.read().map_err(|_| SinkError::LockFailed)?;
        Ok(mentions.iter().filter(|m| m.group == group).cloned().collect())
    }

    pub fn len(&self) -> usize {
        self.mentions.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnnotationSink for DocumentAnnotations {
    fn accept(&self, annotation: MentionAnnotation) -> Result<(), SinkError> {
        if let Some(doc_len) = self.doc_len {
            if annotation.span.end > doc_len {
                return Err(SinkError::SpanOutOfBounds {
                    start: annotation.span.start,
                    end: annotation.span.end,
                    doc_len,
                });
            }
        }
        let mut mentions = self.mentions.write().map_err(|_| SinkError::LockFailed)?;
        mentions.push(annotation);
        Ok(())
    }
}
