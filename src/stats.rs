//! Basic statistics of a text.

use serde::{Deserialize, Serialize};

use crate::filter::Stopwords;

const VOWELS: &str = "aeiou";
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Length of the text in characters.
    #[serde(rename = "Length of Text")]
    pub length: usize,
    #[serde(rename = "Num of Vowels")]
    pub vowels: usize,
    #[serde(rename = "Num of Consonants")]
    pub consonants: usize,
    #[serde(rename = "Num of Stopwords")]
    pub stopwords: usize,
}

impl TextStats {
    pub fn new(text: &str, stopwords: &Stopwords) -> Self {
        let count_in = |set: &str| {
            text.chars()
                .filter(|c| set.contains(c.to_ascii_lowercase()))
                .count()
        };

        TextStats {
            length: text.chars().count(),
            vowels: count_in(VOWELS),
            consonants: count_in(CONSONANTS),
            stopwords: text
                .split_whitespace()
                .filter(|word| stopwords.contains(word))
                .count(),
        }
    }
}
