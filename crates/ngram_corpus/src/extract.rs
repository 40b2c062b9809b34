use scraper::{ElementRef, Html, Selector};

/// Content container of a MediaWiki article page.
pub const WIKI_CONTENT_SELECTOR: &str = "div#mw-content-text";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid selector {0:?}")]
    InvalidSelector(String),
    #[error("content container not found (page title: {})", .title.as_deref().unwrap_or("none"))]
    MissingContent { title: Option<String> },
    #[error("content container has no paragraphs")]
    NoParagraphs,
}

/// Pulls the prose out of an HTML page.
pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> Result<String, ExtractError>;
}

/// Collects the `<p>` text inside a content container.
///
/// Whitespace inside each paragraph collapses to single spaces, empty
/// paragraphs are dropped, and the rest are joined with a space.
#[derive(Debug, Clone)]
pub struct ParagraphExtractor {
    container: String,
}

impl ParagraphExtractor {
    pub fn new(container: impl Into<String>) -> Result<Self, ExtractError> {
        let container = container.into();
        parse_selector(&container)?;
        Ok(Self { container })
    }
}

impl Default for ParagraphExtractor {
    fn default() -> Self {
        Self {
            container: WIKI_CONTENT_SELECTOR.to_string(),
        }
    }
}

impl Extractor for ParagraphExtractor {
    fn extract(&self, html: &str) -> Result<String, ExtractError> {
        let doc = Html::parse_document(html);
        let container_sel = parse_selector(&self.container)?;
        let paragraph_sel = parse_selector("p")?;

        let Some(container) = doc.select(&container_sel).next() else {
            return Err(ExtractError::MissingContent {
                title: page_title(&doc),
            });
        };

        let mut paragraphs = container.select(&paragraph_sel).peekable();
        if paragraphs.peek().is_none() {
            return Err(ExtractError::NoParagraphs);
        }

        let text = paragraphs
            .map(collapse_whitespace)
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(text)
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|_| ExtractError::InvalidSelector(selector.to_string()))
}

fn collapse_whitespace(element: ElementRef) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn page_title(doc: &Html) -> Option<String> {
    let title_sel = Selector::parse("title").ok()?;
    doc.select(&title_sel)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}
