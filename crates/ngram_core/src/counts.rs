use std::collections::HashMap;

use crate::Token;

/// Next-word counts observed after one context, with their cached sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountEntry {
    words: HashMap<Token, u64>,
    total: u64,
}

impl CountEntry {
    fn record(&mut self, word: &Token) {
        *self.words.entry(word.clone()).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, word: &str) -> u64 {
        self.words.get(word).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn words(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

/// Frequency counts for every order `1..=max_order`.
///
/// Slot `k - 1` maps each context of length `k - 1` to its [`CountEntry`].
/// Order 1 uses the empty context. Built once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CountTable {
    orders: Vec<HashMap<Vec<Token>, CountEntry>>,
}

impl CountTable {
    pub fn build(tokens: &[Token], max_order: usize) -> Self {
        let mut orders = Vec::with_capacity(max_order);
        for order in 1..=max_order {
            ngram_logging::ngram_debug!("Building {}-grams", order);
            let mut contexts: HashMap<Vec<Token>, CountEntry> = HashMap::new();
            for window in tokens.windows(order) {
                let (context, word) = window.split_at(order - 1);
                contexts.entry(context.to_vec()).or_default().record(&word[0]);
            }
            orders.push(contexts);
        }
        Self { orders }
    }

    pub fn max_order(&self) -> usize {
        self.orders.len()
    }

    /// Returns the entry for `context` at `order`, if that context was ever seen.
    pub fn entry(&self, order: usize, context: &[Token]) -> Option<&CountEntry> {
        let contexts = self.orders.get(order.checked_sub(1)?)?;
        contexts.get(context).filter(|entry| entry.total > 0)
    }

    pub fn count(&self, order: usize, context: &[Token], word: &str) -> u64 {
        self.entry(order, context).map_or(0, |entry| entry.count(word))
    }

    pub fn context_total(&self, order: usize, context: &[Token]) -> u64 {
        self.entry(order, context).map_or(0, CountEntry::total)
    }

    /// All `(context, entry)` pairs recorded for `order`.
    pub fn contexts(&self, order: usize) -> impl Iterator<Item = (&[Token], &CountEntry)> {
        order
            .checked_sub(1)
            .and_then(|slot| self.orders.get(slot))
            .into_iter()
            .flat_map(|contexts| contexts.iter().map(|(ctx, entry)| (ctx.as_slice(), entry)))
    }
}
