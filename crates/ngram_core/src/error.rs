use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("max order must be at least 1")]
    InvalidOrder,
    #[error("smoothing constant must be finite and > 0, got {0}")]
    InvalidSmoothing(f64),
    #[error("alphabet {alphabet:?} is not a valid character class: {message}")]
    InvalidAlphabet { alphabet: String, message: String },
    #[error("order {order} is outside 1..={max_order}")]
    OrderOutOfRange { order: usize, max_order: usize },
    #[error("order {order} expects a context of {expected} tokens, got {actual}")]
    ContextLength {
        order: usize,
        expected: usize,
        actual: usize,
    },
}
