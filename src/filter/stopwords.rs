//! Stopword lists.

use lazy_static::lazy_static;
use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

lazy_static! {
    static ref ENGLISH: HashSet<String> = get(LANGUAGE::English)
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
}

/// A set of lowercase stopwords. Lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Stopwords::english()
    }
}

impl Stopwords {
    /// The English NLTK stopword list.
    pub fn english() -> Self {
        Stopwords {
            words: ENGLISH.clone(),
        }
    }

    /// Create a stopword list from a custom list of words.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Stopwords {
            words: words.iter().map(|x| x.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add words to the list.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|x| x.as_ref().to_lowercase()));
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
