use std::collections::HashSet;

use ngram_logging::ngram_info;

use crate::{CountTable, ModelConfig, ModelError, Token};

/// Corpus statistics reported once training completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainingStats {
    pub token_count: usize,
    pub vocabulary_size: usize,
}

/// A trained n-gram model: count tables for orders `1..=N`, the vocabulary and
/// the corpus size. Immutable once built, so it can be shared across threads
/// for concurrent scoring.
#[derive(Debug, Clone)]
pub struct NGramModel {
    pub(crate) config: ModelConfig,
    pub(crate) table: CountTable,
    pub(crate) vocabulary: HashSet<Token>,
    pub(crate) corpus_size: usize,
}

impl NGramModel {
    /// Builds the model in one batch pass over an already tokenized stream.
    ///
    /// An empty stream is accepted and produces an untrained model whose
    /// queries all return the degenerate fallback probability.
    pub fn from_tokens(config: ModelConfig, tokens: &[Token]) -> Result<Self, ModelError> {
        config.validate()?;

        let corpus_size = tokens.len();
        let vocabulary: HashSet<Token> = tokens.iter().cloned().collect();
        ngram_info!(
            "Corpus statistics: {} tokens, vocabulary of {}",
            corpus_size,
            vocabulary.len()
        );

        let table = CountTable::build(tokens, config.max_order);
        ngram_info!("Training complete (max order {})", config.max_order);

        Ok(Self {
            config,
            table,
            vocabulary,
            corpus_size,
        })
    }

    pub fn stats(&self) -> TrainingStats {
        TrainingStats {
            token_count: self.corpus_size,
            vocabulary_size: self.vocabulary.len(),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn max_order(&self) -> usize {
        self.config.max_order
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.vocabulary.contains(token)
    }

    pub fn counts(&self) -> &CountTable {
        &self.table
    }

    pub fn count(&self, order: usize, context: &[Token], word: &str) -> u64 {
        self.table.count(order, context, word)
    }

    pub fn context_total(&self, order: usize, context: &[Token]) -> u64 {
        self.table.context_total(order, context)
    }
}
