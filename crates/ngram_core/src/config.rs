use serde::{Deserialize, Serialize};

use crate::token::word_pattern;
use crate::ModelError;

/// Lower-case Romanian letters, written as the body of a regex character class.
pub const ROMANIAN_ALPHABET: &str = "a-zăâîșț";

/// Model-wide settings fixed at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Largest n-gram order counted (N).
    pub max_order: usize,
    /// Add-k constant of the unigram base case. It only applies when no
    /// order-1 context has been counted, which never happens once the model
    /// has seen a token, so a trained model's output does not depend on it.
    pub smoothing: f64,
    /// Character-class body (no surrounding brackets) of the letters that make up a word.
    pub alphabet: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_order: 4,
            smoothing: 0.1,
            alphabet: ROMANIAN_ALPHABET.to_string(),
        }
    }
}

impl ModelConfig {
    pub fn new(max_order: usize, smoothing: f64) -> Self {
        Self {
            max_order,
            smoothing,
            ..Self::default()
        }
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.max_order == 0 {
            return Err(ModelError::InvalidOrder);
        }
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(ModelError::InvalidSmoothing(self.smoothing));
        }
        word_pattern(&self.alphabet)?;
        Ok(())
    }
}
