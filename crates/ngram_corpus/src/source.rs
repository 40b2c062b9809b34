use std::collections::HashMap;

use ngram_logging::{ngram_info, ngram_warn};

use crate::{decode_page, DecodeError, ExtractError, Extractor, FetchError, Fetcher};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),
}

/// Supplies the raw text of one training document.
///
/// Never fails: a document that cannot be obtained comes back as an empty
/// string so that training proceeds with whatever was gathered.
#[async_trait::async_trait]
pub trait CorpusSource: Send + Sync {
    async fn fetch_text(&self, identifier: &str) -> String;
}

/// Fetches pages over HTTP and extracts their paragraph text.
pub struct WebCorpusSource<F, E> {
    fetcher: F,
    extractor: E,
}

impl<F: Fetcher, E: Extractor> WebCorpusSource<F, E> {
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self { fetcher, extractor }
    }

    /// Like [`CorpusSource::fetch_text`], but reports why a page yielded nothing.
    pub async fn try_fetch_text(&self, url: &str) -> Result<String, SourceError> {
        let output = self.fetcher.fetch(url).await?;
        let decoded = decode_page(&output.bytes, output.metadata.content_type.as_deref())?;
        let text = self.extractor.extract(&decoded.html)?;
        ngram_info!(
            "Extracted {} characters, {} words from {} ({})",
            text.chars().count(),
            text.split_whitespace().count(),
            output.metadata.final_url,
            decoded.encoding
        );
        Ok(text)
    }
}

#[async_trait::async_trait]
impl<F: Fetcher, E: Extractor> CorpusSource for WebCorpusSource<F, E> {
    async fn fetch_text(&self, identifier: &str) -> String {
        match self.try_fetch_text(identifier).await {
            Ok(text) => text,
            Err(err) => {
                ngram_warn!("Skipping {}: {}", identifier, err);
                String::new()
            }
        }
    }
}

/// In-memory documents keyed by identifier, for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCorpusSource {
    documents: HashMap<String, String>,
}

impl StaticCorpusSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, identifier: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(identifier.into(), text.into());
        self
    }
}

#[async_trait::async_trait]
impl CorpusSource for StaticCorpusSource {
    async fn fetch_text(&self, identifier: &str) -> String {
        match self.documents.get(identifier) {
            Some(text) => text.clone(),
            None => {
                ngram_warn!("No document registered for {}", identifier);
                String::new()
            }
        }
    }
}
