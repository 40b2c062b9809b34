use anyhow::Context;
use ngram_core::{LanguageModel, ModelConfig, SentenceScore, TrainingStats};
use ngram_corpus::{
    gather_corpus, CorpusSource, LogProgressSink, ParagraphExtractor, ReqwestFetcher,
    WebCorpusSource,
};
use ngram_logging::{ngram_info, ngram_warn};

use crate::settings::AppSettings;

pub struct Report {
    pub stats: TrainingStats,
    pub scores: Vec<(String, SentenceScore)>,
}

/// Gathers the configured pages, trains on them and scores every sentence.
pub fn run(settings: &AppSettings) -> anyhow::Result<Report> {
    let source = WebCorpusSource::new(
        ReqwestFetcher::new(settings.fetch.to_fetch_settings()),
        ParagraphExtractor::default(),
    );
    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    run_with_source(&runtime, &source, settings)
}

pub fn run_with_source<S: CorpusSource + ?Sized>(
    runtime: &tokio::runtime::Runtime,
    source: &S,
    settings: &AppSettings,
) -> anyhow::Result<Report> {
    ngram_info!("Fetching and processing {} documents", settings.sources.len());
    let corpus = runtime.block_on(gather_corpus(
        source,
        &settings.sources,
        settings.fetch.concurrency,
        &LogProgressSink,
    ));
    if corpus.empty_count() == corpus.len() {
        ngram_warn!("No text was gathered; scores will be degenerate");
    }

    train_and_score(settings.model.clone(), &corpus.texts(), &settings.sentences)
}

pub fn train_and_score<S: AsRef<str>>(
    config: ModelConfig,
    documents: &[S],
    sentences: &[String],
) -> anyhow::Result<Report> {
    let (model, stats) = LanguageModel::train(config, documents).context("training model")?;

    let scores = sentences
        .iter()
        .map(|sentence| {
            ngram_info!("Calculating probability for: {:?}", sentence);
            (sentence.clone(), model.score(sentence))
        })
        .collect();
    Ok(Report { stats, scores })
}

impl Report {
    pub fn render(&self) -> String {
        let mut out = format!(
            "Corpus: {} tokens, vocabulary of {}\n",
            self.stats.token_count, self.stats.vocabulary_size
        );
        if self.stats.vocabulary_size == 0 {
            out.push_str("Model is untrained; probabilities below are degenerate.\n");
        }
        for (sentence, score) in &self.scores {
            out.push_str(&format!("\n{sentence}\n"));
            for token in &score.tokens {
                out.push_str(&format!(
                    "  P({} | {}) = {:.6}\n",
                    token.word,
                    token.context.join(" "),
                    token.probability
                ));
            }
            out.push_str(&format!(
                "  Log probability: {:.4}\n  Probability: {:.2e}\n",
                score.log_probability, score.probability
            ));
        }
        out
    }
}
