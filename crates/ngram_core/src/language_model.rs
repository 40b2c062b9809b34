use ngram_logging::ngram_debug;

use crate::{
    AlphabetTokenizer, ModelConfig, ModelError, NGramModel, SentenceScore, Token, Tokenizer,
    TrainingStats,
};

/// A trained [`NGramModel`] together with the tokenizer it was trained with,
/// so that sentences are scored under the same token rules.
pub struct LanguageModel {
    tokenizer: Box<dyn Tokenizer>,
    model: NGramModel,
}

impl LanguageModel {
    /// Trains on raw documents using an [`AlphabetTokenizer`] built from `config.alphabet`.
    pub fn train<S: AsRef<str>>(
        config: ModelConfig,
        documents: &[S],
    ) -> Result<(Self, TrainingStats), ModelError> {
        config.validate()?;
        let tokenizer = AlphabetTokenizer::new(&config.alphabet)?;
        Self::train_with_tokenizer(config, Box::new(tokenizer), documents)
    }

    /// Trains with a caller-supplied tokenizer. The token streams of all
    /// documents are concatenated without any extra boundary marker.
    pub fn train_with_tokenizer<S: AsRef<str>>(
        config: ModelConfig,
        tokenizer: Box<dyn Tokenizer>,
        documents: &[S],
    ) -> Result<(Self, TrainingStats), ModelError> {
        let mut all_tokens: Vec<Token> = Vec::new();
        for (index, document) in documents.iter().enumerate() {
            let tokens = tokenizer.tokenize(document.as_ref());
            ngram_debug!("Document {} produced {} tokens", index, tokens.len());
            all_tokens.extend(tokens);
        }

        let model = NGramModel::from_tokens(config, &all_tokens)?;
        let stats = model.stats();
        Ok((Self { tokenizer, model }, stats))
    }

    pub fn model(&self) -> &NGramModel {
        &self.model
    }

    pub fn stats(&self) -> TrainingStats {
        self.model.stats()
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    pub fn probability(
        &self,
        word: &str,
        context: &[Token],
        order: usize,
    ) -> Result<f64, ModelError> {
        self.model.probability(word, context, order)
    }

    /// Natural-log probability of `sentence`, plus its per-word breakdown.
    /// Empty and punctuation-only sentences score a log-probability of 0.
    pub fn score(&self, sentence: &str) -> SentenceScore {
        ngram_debug!("Scoring {:?}", sentence);
        let tokens = self.tokenizer.tokenize(sentence);
        self.model.score_tokens(&tokens)
    }
}
