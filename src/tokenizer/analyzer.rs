use log::debug;
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

use super::{Lemmatize, Lemmatizer, TokenLemma, Tokenizer};

/// A [Tokenizer] which remembers its result for every text it has seen.
///
/// The cache lives as long as the analyzer and is never invalidated.
#[derive(Debug)]
pub struct Analyzer<L = Lemmatizer> {
    tokenizer: Tokenizer<L>,
    cache: RwLock<HashMap<String, Arc<Vec<TokenLemma>>>>,
}

impl Default for Analyzer<Lemmatizer> {
    fn default() -> Self {
        Analyzer::new(Tokenizer::default())
    }
}

impl<L: Lemmatize> Analyzer<L> {
    pub fn new(tokenizer: Tokenizer<L>) -> Self {
        Analyzer {
            tokenizer,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer<L> {
        &self.tokenizer
    }

    /// Tokens and lemmas of `text`. Repeated calls with the same text return the cached result.
    pub fn analyze(&self, text: &str) -> Arc<Vec<TokenLemma>> {
        if let Some(tokens) = self.cache.read().get(text) {
            debug!("analyzer cache hit for text of length {}", text.len());
            return Arc::clone(tokens);
        }

        let tokens = Arc::new(self.tokenizer.tokenize(text));

        Arc::clone(
            self.cache
                .write()
                .entry(text.to_string())
                .or_insert(tokens),
        )
    }

    /// Number of distinct texts in the cache.
    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingLemmatizer {
        calls: Cell<usize>,
    }

    impl Lemmatize for CountingLemmatizer {
        fn lemma(&self, word: &str) -> String {
            self.calls.set(self.calls.get() + 1);
            word.to_lowercase()
        }
    }

    #[test]
    fn repeated_text_hits_cache() {
        let analyzer: Analyzer = Analyzer::default();

        let first = analyzer.analyze("The cats were running");
        let second = analyzer.analyze("The cats were running");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(analyzer.cache_len(), 1);
        assert_eq!(first[1], TokenLemma::new("cats", "cat"));
    }

    #[test]
    fn distinct_texts_are_cached_separately() {
        let analyzer: Analyzer = Analyzer::default();

        analyzer.analyze("a text");
        analyzer.analyze("a text ");
        analyzer.analyze("");

        assert_eq!(analyzer.cache_len(), 3);
        assert!(analyzer.analyze("").is_empty());
    }

    #[test]
    fn cache_hit_skips_lemmatizer() {
        let analyzer = Analyzer::new(Tokenizer::new(CountingLemmatizer {
            calls: Cell::new(0),
        }));

        analyzer.analyze("one two three");
        analyzer.analyze("one two three");

        assert_eq!(analyzer.tokenizer().lemmatizer().calls.get(), 3);
    }
}
