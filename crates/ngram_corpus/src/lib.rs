//! Corpus acquisition: fetch web pages, decode them and extract their prose.
mod decode;
mod extract;
mod fetch;
mod gather;
mod source;
mod types;

pub use decode::{decode_page, DecodeError, DecodedPage};
pub use extract::{ExtractError, Extractor, ParagraphExtractor, WIKI_CONTENT_SELECTOR};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use gather::{gather_corpus, Corpus, CorpusDocument, LogProgressSink, ProgressSink};
pub use source::{CorpusSource, SourceError, StaticCorpusSource, WebCorpusSource};
pub use types::{CorpusEvent, DocumentId, FailureKind, FetchError, FetchMetadata, FetchOutput};
