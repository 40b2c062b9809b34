use futures_util::stream::{self, StreamExt};
use ngram_logging::{ngram_info, ngram_warn};

use crate::{CorpusEvent, CorpusSource, DocumentId};

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: CorpusEvent);
}

/// Reports progress through the logging macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn emit(&self, event: CorpusEvent) {
        match event {
            CorpusEvent::Started { doc_id, identifier } => {
                ngram_info!("Processing [{}]: {}", doc_id, identifier);
            }
            CorpusEvent::Completed {
                doc_id,
                identifier,
                chars: 0,
            } => {
                ngram_warn!("Document [{}] {} produced no text", doc_id, identifier);
            }
            CorpusEvent::Completed { doc_id, chars, .. } => {
                ngram_info!("Document [{}] done: {} characters", doc_id, chars);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusDocument {
    pub identifier: String,
    pub text: String,
}

/// Documents gathered for training, in the order they were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<CorpusDocument>,
}

impl Corpus {
    pub fn documents(&self) -> &[CorpusDocument] {
        &self.documents
    }

    pub fn texts(&self) -> Vec<&str> {
        self.documents.iter().map(|doc| doc.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of documents that degraded to empty text.
    pub fn empty_count(&self) -> usize {
        self.documents.iter().filter(|doc| doc.text.is_empty()).count()
    }
}

/// Fetches every identifier with at most `concurrency` requests in flight.
/// Output order matches `identifiers` regardless of completion order.
pub async fn gather_corpus<S, I>(
    source: &S,
    identifiers: &[I],
    concurrency: usize,
    sink: &dyn ProgressSink,
) -> Corpus
where
    S: CorpusSource + ?Sized,
    I: AsRef<str>,
{
    let documents = stream::iter(identifiers.iter().enumerate())
        .map(|(doc_id, identifier)| fetch_one(source, doc_id, identifier.as_ref(), sink))
        .buffered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    let corpus = Corpus { documents };
    ngram_info!(
        "Gathered {} documents ({} empty)",
        corpus.len(),
        corpus.empty_count()
    );
    corpus
}

async fn fetch_one<S: CorpusSource + ?Sized>(
    source: &S,
    doc_id: DocumentId,
    identifier: &str,
    sink: &dyn ProgressSink,
) -> CorpusDocument {
    sink.emit(CorpusEvent::Started {
        doc_id,
        identifier: identifier.to_string(),
    });
    let text = source.fetch_text(identifier).await;
    sink.emit(CorpusEvent::Completed {
        doc_id,
        identifier: identifier.to_string(),
        chars: text.chars().count(),
    });
    CorpusDocument {
        identifier: identifier.to_string(),
        text,
    }
}
