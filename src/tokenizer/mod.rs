//! A tokenizer to split raw text into tokens.
//! Each token is assigned a lemma by a [Lemmatize] implementation, by default the rule-based English [Lemmatizer].
//! The [Analyzer] memoizes the result for every distinct input text.

use lazy_static::lazy_static;
use onig::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

mod analyzer;
mod lemma;

pub use analyzer::Analyzer;
pub use lemma::{Lemmatize, Lemmatizer};

use crate::utils::{split, splitting_chars};

/// A token and its lemma.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenLemma {
    pub token: String,
    pub lemma: String,
}

impl TokenLemma {
    pub fn new<S: Into<String>, T: Into<String>>(token: S, lemma: T) -> Self {
        TokenLemma {
            token: token.into(),
            lemma: lemma.into(),
        }
    }
}

impl fmt::Display for TokenLemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"Token\": {},\n\"Lemma\": {}", self.token, self.lemma)
    }
}

#[derive(Debug, Clone)]
pub struct Tokenizer<L = Lemmatizer> {
    lemmatizer: L,
}

impl Default for Tokenizer<Lemmatizer> {
    fn default() -> Self {
        Tokenizer::new(Lemmatizer)
    }
}

impl<L: Lemmatize> Tokenizer<L> {
    pub fn new(lemmatizer: L) -> Self {
        Tokenizer { lemmatizer }
    }

    pub fn lemmatizer(&self) -> &L {
        &self.lemmatizer
    }

    /// Splits the text at whitespace and at [splitting_chars]. URLs are kept as one token.
    /// Whitespace is not part of the result.
    pub fn token_strs<'t>(&self, text: &'t str) -> Vec<&'t str> {
        lazy_static! {
            // see https://stackoverflow.com/a/17773849
            static ref URL_REGEX: Regex = Regex::new(r"(https?:\/\/(?:www\.|(?!www))[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.[^\s]{2,}|www\.[a-zA-Z0-9][a-zA-Z0-9-]+[a-zA-Z0-9]\.[^\s]{2,}|https?:\/\/(?:www\.|(?!www))[a-zA-Z0-9]+\.[^\s]{2,}|www\.[a-zA-Z0-9]+\.[^\s]{2,})").unwrap();
        }

        let mut tokens = Vec::new();
        let mut prev = 0;
        let split_func = |c: char| c.is_whitespace() || splitting_chars().contains(c);

        for (start, end) in URL_REGEX.find_iter(text) {
            tokens.extend(split(&text[prev..start], split_func));
            tokens.push(&text[start..end]);
            prev = end;
        }

        tokens.extend(split(&text[prev..], split_func));
        tokens.retain(|x| !x.trim().is_empty());

        tokens
    }

    pub fn tokenize(&self, text: &str) -> Vec<TokenLemma> {
        self.token_strs(text)
            .into_iter()
            .map(|token| TokenLemma::new(token, self.lemmatizer.lemma(token)))
            .collect()
    }
}
