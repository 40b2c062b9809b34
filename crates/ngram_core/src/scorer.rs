use ngram_logging::{ngram_debug, ngram_info};

use crate::{is_sentinel, NGramModel, Token, START_TOKEN};

/// Probability assigned to one word of a scored sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenScore {
    pub word: Token,
    pub context: Vec<Token>,
    pub order: usize,
    pub probability: f64,
}

/// Result of scoring a sentence.
///
/// `log_probability` is the natural-log sum over words and is the value to
/// compare. `probability` is its exponential and underflows toward zero for
/// long sentences.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore {
    pub log_probability: f64,
    pub probability: f64,
    pub tokens: Vec<TokenScore>,
}

impl SentenceScore {
    fn empty() -> Self {
        Self {
            log_probability: 0.0,
            probability: 1.0,
            tokens: Vec::new(),
        }
    }
}

impl NGramModel {
    /// Scores a tokenized sentence. Sentinel tokens in `tokens` are ignored;
    /// a single start marker is prepended before the first word.
    pub fn score_tokens(&self, tokens: &[Token]) -> SentenceScore {
        let words: Vec<&Token> = tokens.iter().filter(|t| !is_sentinel(t)).collect();
        if words.is_empty() {
            return SentenceScore::empty();
        }

        let mut padded: Vec<Token> = Vec::with_capacity(words.len() + 1);
        padded.push(START_TOKEN.to_string());
        padded.extend(words.into_iter().cloned());

        let window = self.config.max_order - 1;
        let mut log_probability = 0.0;
        let mut scores = Vec::with_capacity(padded.len() - 1);
        for i in 1..padded.len() {
            let context = &padded[i.saturating_sub(window)..i];
            let order = context.len() + 1;
            let word = &padded[i];

            let probability = self.estimate(word, context, order);
            log_probability += probability.ln();
            ngram_debug!("P({} | {}) = {:.6}", word, context.join(" "), probability);

            scores.push(TokenScore {
                word: word.clone(),
                context: context.to_vec(),
                order,
                probability,
            });
        }

        let probability = log_probability.exp();
        ngram_info!(
            "Log probability: {:.4}, probability: {:.2e}",
            log_probability,
            probability
        );
        SentenceScore {
            log_probability,
            probability,
            tokens: scores,
        }
    }
}
