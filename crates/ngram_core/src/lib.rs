//! N-gram core: tokenization, count tables, backoff estimation and sentence scoring.
mod config;
mod counts;
mod error;
mod estimator;
mod language_model;
mod model;
mod scorer;
mod token;

pub use config::{ModelConfig, ROMANIAN_ALPHABET};
pub use counts::{CountEntry, CountTable};
pub use error::ModelError;
pub use estimator::{DEGENERATE_PROBABILITY, SEEN_EPSILON};
pub use language_model::LanguageModel;
pub use model::{NGramModel, TrainingStats};
pub use scorer::{SentenceScore, TokenScore};
pub use token::{is_sentinel, AlphabetTokenizer, Token, Tokenizer, END_TOKEN, START_TOKEN};
