//! Backoff probability estimation over the trained count tables.
//!
//! Priority, for a query `(word, context, order)`:
//! 1. context seen at `order`: `(c + ε) / (T + ε·V)` when the word follows it,
//!    `1 / (T + V)` otherwise;
//! 2. context unseen: drop its oldest token and retry one order lower;
//! 3. nothing matched down to order 1: add-k unigram estimate `(c₁ + k) / (S + k·V)`;
//! 4. empty vocabulary: [`DEGENERATE_PROBABILITY`].
//!
//! Backed-off mass is not renormalized, so the values at orders above 1 do not
//! sum to 1 over the vocabulary.

use crate::{ModelError, NGramModel, Token};

/// Additive constant for words already seen after a context.
pub const SEEN_EPSILON: f64 = 0.001;

/// Returned by an untrained model (empty vocabulary). It is `k / (k·V)` with `V`
/// clamped to 1 and carries no information about the word.
pub const DEGENERATE_PROBABILITY: f64 = 1.0;

impl NGramModel {
    /// Smoothed probability of `word` following `context` at `order`.
    ///
    /// `order` must lie in `1..=N` and `context` must hold exactly `order - 1`
    /// tokens. The result is always in `(0, 1]`.
    pub fn probability(
        &self,
        word: &str,
        context: &[Token],
        order: usize,
    ) -> Result<f64, ModelError> {
        let max_order = self.config.max_order;
        if order == 0 || order > max_order {
            return Err(ModelError::OrderOutOfRange { order, max_order });
        }
        if context.len() != order - 1 {
            return Err(ModelError::ContextLength {
                order,
                expected: order - 1,
                actual: context.len(),
            });
        }
        Ok(self.estimate(word, context, order))
    }

    /// Same as [`NGramModel::probability`] for callers that already guarantee
    /// `context.len() == order - 1` and `order <= N`.
    pub(crate) fn estimate(&self, word: &str, mut context: &[Token], mut order: usize) -> f64 {
        let vocabulary_size = self.vocabulary.len() as f64;

        loop {
            if let Some(entry) = self.table.entry(order, context) {
                let total = entry.total() as f64;
                let count = entry.count(word);
                return if count > 0 {
                    (count as f64 + SEEN_EPSILON) / (total + SEEN_EPSILON * vocabulary_size)
                } else {
                    1.0 / (total + vocabulary_size)
                };
            }
            match context.split_first() {
                Some((_, shorter)) if order > 1 => {
                    context = shorter;
                    order -= 1;
                }
                _ => break,
            }
        }

        if self.vocabulary.is_empty() {
            return DEGENERATE_PROBABILITY;
        }

        let k = self.config.smoothing;
        let unigram = self.table.count(1, &[], word) as f64;
        (unigram + k) / (self.corpus_size as f64 + k * vocabulary_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelConfig;

    #[test]
    fn untrained_model_returns_degenerate_constant() {
        let model = NGramModel::from_tokens(ModelConfig::new(3, 0.5), &[]).unwrap();
        assert_eq!(model.vocabulary_size(), 0);
        assert_eq!(model.probability("x", &[], 1), Ok(DEGENERATE_PROBABILITY));
        let context = vec!["a".to_string(), "b".to_string()];
        assert_eq!(model.probability("x", &context, 3), Ok(DEGENERATE_PROBABILITY));
    }
}
