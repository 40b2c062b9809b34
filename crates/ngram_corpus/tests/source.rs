use std::sync::{Arc, Mutex};
use std::time::Duration;

use ngram_corpus::{
    gather_corpus, CorpusEvent, CorpusSource, FetchSettings, ParagraphExtractor, ProgressSink,
    ReqwestFetcher, SourceError, StaticCorpusSource, WebCorpusSource,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    ngram_logging::initialize_for_tests();
}

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<CorpusEvent>>>,
}

impl TestSink {
    fn take(&self) -> Vec<CorpusEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: CorpusEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn article(body: &str) -> String {
    format!(
        r#"<html><head><title>Test</title></head><body><div id="mw-content-text">{body}</div></body></html>"#
    )
}

fn web_source() -> WebCorpusSource<ReqwestFetcher, ParagraphExtractor> {
    WebCorpusSource::new(
        ReqwestFetcher::new(FetchSettings::default()),
        ParagraphExtractor::default(),
    )
}

async fn mount_page(server: &MockServer, route: &str, html: String, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(delay)
                .set_body_raw(html, "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn web_source_extracts_article_text() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/wiki/Romania",
        article("<p>România este o țară.</p><p>Are munți.</p>"),
        Duration::ZERO,
    )
    .await;

    let text = web_source()
        .fetch_text(&format!("{}/wiki/Romania", server.uri()))
        .await;
    assert_eq!(text, "România este o țară. Are munți.");
}

#[tokio::test]
async fn web_source_degrades_failures_to_empty_text() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_page(
        &server,
        "/no-content",
        "<html><head><title>Altceva</title></head><body><p>x</p></body></html>".to_string(),
        Duration::ZERO,
    )
    .await;

    let source = web_source();
    assert_eq!(source.fetch_text(&format!("{}/missing", server.uri())).await, "");
    assert_eq!(source.fetch_text(&format!("{}/no-content", server.uri())).await, "");

    let err = source
        .try_fetch_text(&format!("{}/no-content", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, SourceError::Extract(_)), "unexpected {err:?}");
    assert!(err.to_string().contains("Altceva"));
}

#[tokio::test]
async fn static_source_returns_registered_documents() {
    init_logging();
    let source = StaticCorpusSource::new().with_document("a", "Ana are mere.");
    assert_eq!(source.fetch_text("a").await, "Ana are mere.");
    assert_eq!(source.fetch_text("b").await, "");
}

#[tokio::test]
async fn gather_preserves_request_order_and_counts_empty_documents() {
    init_logging();
    let source = StaticCorpusSource::new()
        .with_document("one", "Unu.")
        .with_document("three", "Trei.");
    let sink = TestSink::default();

    let corpus = gather_corpus(&source, &["one", "two", "three"], 2, &sink).await;

    let identifiers: Vec<&str> = corpus
        .documents()
        .iter()
        .map(|doc| doc.identifier.as_str())
        .collect();
    assert_eq!(identifiers, vec!["one", "two", "three"]);
    assert_eq!(corpus.texts(), vec!["Unu.", "", "Trei."]);
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.empty_count(), 1);

    let completed: Vec<(usize, usize)> = sink
        .take()
        .into_iter()
        .filter_map(|event| match event {
            CorpusEvent::Completed { doc_id, chars, .. } => Some((doc_id, chars)),
            CorpusEvent::Started { .. } => None,
        })
        .collect();
    assert_eq!(completed.len(), 3);
    assert!(completed.contains(&(1, 0)));
    assert!(completed.contains(&(2, 5)));
}

#[tokio::test]
async fn gather_keeps_order_when_later_pages_finish_first() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(&server, "/slow", article("<p>Lent.</p>"), Duration::from_millis(200)).await;
    mount_page(&server, "/fast", article("<p>Repede.</p>"), Duration::ZERO).await;

    let urls = vec![
        format!("{}/slow", server.uri()),
        format!("{}/fast", server.uri()),
    ];
    let sink = TestSink::default();
    let corpus = gather_corpus(&web_source(), &urls, 4, &sink).await;

    assert_eq!(corpus.texts(), vec!["Lent.", "Repede."]);
    assert_eq!(corpus.empty_count(), 0);
}

#[tokio::test]
async fn gather_of_nothing_is_empty() {
    let sink = TestSink::default();
    let corpus = gather_corpus(&StaticCorpusSource::new(), &Vec::<String>::new(), 0, &sink).await;
    assert!(corpus.is_empty());
    assert!(sink.take().is_empty());
}
