//! A keyword "summary" made from the most frequent words of a text.
//!
//! This does not assemble sentences: the summary is the list of the `count` most frequent normalized words,
//! ties broken by the position at which a word is first seen.

use indexmap::IndexMap;
use itertools::Itertools;

/// Number of words in a summary if nothing else is configured.
pub const DEFAULT_COUNT: usize = 3;

/// Replaces every character outside `[a-zA-Z]` with a space and lowercases the rest.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

/// Occurrence counts of normalized words, iterating in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencyTable {
    counts: IndexMap<String, usize>,
}

impl WordFrequencyTable {
    pub fn new(text: &str) -> Self {
        let mut counts = IndexMap::new();

        for word in normalize(text).split_whitespace() {
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }

        WordFrequencyTable { counts }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(word, count)` in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Words sorted by descending count. The sort is stable so ties keep the order of first appearance.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Joins the `count` most frequent words of `text` with a single space.
///
/// Empty or whitespace-only text and `count == 0` give an empty string.
pub fn summarize(text: &str, count: usize) -> String {
    WordFrequencyTable::new(text)
        .ranked()
        .into_iter()
        .take(count)
        .map(|(word, _)| word)
        .join(" ")
}
