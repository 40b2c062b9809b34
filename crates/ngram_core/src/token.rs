use regex::Regex;

use crate::ModelError;

pub type Token = String;

pub const START_TOKEN: &str = "<START>";
pub const END_TOKEN: &str = "<END>";

pub fn is_sentinel(token: &str) -> bool {
    token == START_TOKEN || token == END_TOKEN
}

/// Turns raw text into a flat stream of sentence-bounded tokens.
///
/// Implementations must be deterministic and wrap every non-empty sentence in
/// [`START_TOKEN`] / [`END_TOKEN`].
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Compiles the word pattern for an alphabet given as a character-class body.
///
/// The body may only hold letters and letter ranges such as `a-z`. Negation,
/// escapes, nested classes and set operators are rejected, and so is a range
/// that spans anything other than letters.
pub(crate) fn word_pattern(alphabet: &str) -> Result<Regex, ModelError> {
    let invalid = |message: String| ModelError::InvalidAlphabet {
        alphabet: alphabet.to_string(),
        message,
    };
    if alphabet.is_empty() {
        return Err(invalid("alphabet is empty".into()));
    }

    let mut chars = alphabet.chars().peekable();
    while let Some(first) = chars.next() {
        if !first.is_alphabetic() {
            return Err(invalid(format!("{first:?} is not a letter")));
        }
        if chars.peek() != Some(&'-') {
            continue;
        }
        chars.next();
        let Some(last) = chars.next() else {
            return Err(invalid(format!("range starting at {first:?} has no end")));
        };
        if last < first {
            return Err(invalid(format!("range {first}-{last} is out of order")));
        }
        if let Some(other) = (first..=last).find(|c| !c.is_alphabetic()) {
            return Err(invalid(format!(
                "range {first}-{last} includes non-letter {other:?}"
            )));
        }
    }

    Regex::new(&format!("[{alphabet}]+")).map_err(|err| invalid(err.to_string()))
}

/// Regex tokenizer: lower-cases, drops `[n]` citation markers, splits sentences
/// on runs of `.`, `!` or `?` and keeps maximal runs of alphabet letters.
#[derive(Debug, Clone)]
pub struct AlphabetTokenizer {
    citation: Regex,
    sentence_end: Regex,
    word: Regex,
}

impl AlphabetTokenizer {
    pub fn new(alphabet: &str) -> Result<Self, ModelError> {
        Ok(Self {
            citation: Regex::new(r"\[\d+\]").expect("static citation pattern"),
            sentence_end: Regex::new(r"[.!?]+").expect("static sentence pattern"),
            word: word_pattern(alphabet)?,
        })
    }
}

impl Tokenizer for AlphabetTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let lowered = text.to_lowercase();
        let cleaned = self.citation.replace_all(&lowered, "");

        let mut tokens = Vec::new();
        for sentence in self.sentence_end.split(&cleaned) {
            let mut words = self.word.find_iter(sentence).peekable();
            if words.peek().is_none() {
                continue;
            }
            tokens.push(START_TOKEN.to_string());
            tokens.extend(words.map(|m| m.as_str().to_string()));
            tokens.push(END_TOKEN.to_string());
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_recognised() {
        assert!(is_sentinel(START_TOKEN));
        assert!(is_sentinel(END_TOKEN));
        assert!(!is_sentinel("start"));
    }

    #[test]
    fn empty_alphabet_is_rejected() {
        assert!(matches!(
            AlphabetTokenizer::new(""),
            Err(ModelError::InvalidAlphabet { .. })
        ));
    }
}
