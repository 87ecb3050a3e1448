//! Lexicon-based sentiment scoring.
//!
//! Every word found in the lexicon contributes its polarity and subjectivity. An intensifier directly before a
//! word scales both values, a negation in the two preceding words flips and halves the polarity.
//! The score of a text is the mean over all contributions.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Polarity in `[-1, 1]` (negative to positive) and subjectivity in `[0, 1]` (objective to subjective).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f32,
    pub subjectivity: f32,
}

impl Sentiment {
    pub fn new(polarity: f32, subjectivity: f32) -> Self {
        Sentiment {
            polarity: polarity.max(-1.).min(1.),
            subjectivity: subjectivity.max(0.).min(1.),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sentiment(polarity={}, subjectivity={})",
            self.polarity, self.subjectivity
        )
    }
}

/// Something that assigns a [Sentiment] to a text.
pub trait Score {
    fn score(&self, text: &str) -> Sentiment;
}

impl<'a, T> Score for &'a T
where
    T: Score,
{
    fn score(&self, text: &str) -> Sentiment {
        (*self).score(text)
    }
}

lazy_static! {
    static ref LEXICON: HashMap<&'static str, (f32, f32)> = [
        ("good", (0.7, 0.6)),
        ("great", (0.8, 0.75)),
        ("excellent", (1.0, 1.0)),
        ("wonderful", (1.0, 1.0)),
        ("amazing", (0.6, 0.9)),
        ("awesome", (1.0, 1.0)),
        ("fantastic", (0.4, 0.9)),
        ("brilliant", (0.9, 1.0)),
        ("perfect", (1.0, 1.0)),
        ("beautiful", (0.85, 1.0)),
        ("nice", (0.6, 1.0)),
        ("happy", (0.8, 1.0)),
        ("delicious", (1.0, 1.0)),
        ("love", (0.5, 0.6)),
        ("lovely", (0.5, 0.75)),
        ("best", (1.0, 0.3)),
        ("better", (0.5, 0.5)),
        ("interesting", (0.5, 0.5)),
        ("fun", (0.3, 0.2)),
        ("funny", (0.25, 1.0)),
        ("easy", (0.43, 0.83)),
        ("important", (0.4, 1.0)),
        ("useful", (0.3, 0.0)),
        ("friendly", (0.375, 0.5)),
        ("fast", (0.2, 0.6)),
        ("cheap", (0.4, 0.7)),
        ("fine", (0.42, 0.5)),
        ("clean", (0.37, 0.69)),
        ("fresh", (0.3, 0.5)),
        ("new", (0.136, 0.455)),
        ("right", (0.29, 0.54)),
        ("glad", (0.5, 1.0)),
        ("pleasant", (0.73, 0.97)),
        ("bad", (-0.7, 0.667)),
        ("terrible", (-1.0, 1.0)),
        ("awful", (-1.0, 1.0)),
        ("horrible", (-1.0, 1.0)),
        ("worst", (-1.0, 1.0)),
        ("worse", (-0.4, 0.6)),
        ("poor", (-0.4, 0.6)),
        ("sad", (-0.5, 1.0)),
        ("angry", (-0.5, 1.0)),
        ("hate", (-0.8, 0.9)),
        ("ugly", (-0.7, 1.0)),
        ("boring", (-1.0, 1.0)),
        ("stupid", (-0.8, 1.0)),
        ("wrong", (-0.5, 0.9)),
        ("difficult", (-0.5, 1.0)),
        ("useless", (-0.5, 0.2)),
        ("slow", (-0.3, 0.4)),
        ("expensive", (-0.5, 0.7)),
        ("dirty", (-0.6, 0.8)),
        ("broken", (-0.4, 0.4)),
        ("dangerous", (-0.6, 0.9)),
        ("annoying", (-0.8, 0.9)),
        ("disappointing", (-0.6, 0.7)),
        ("small", (-0.25, 0.4)),
        ("old", (0.1, 0.2)),
    ]
    .iter()
    .cloned()
    .collect();
    static ref INTENSIFIERS: HashMap<&'static str, f32> = [
        ("very", 1.3),
        ("really", 1.3),
        ("so", 1.3),
        ("too", 1.3),
        ("extremely", 1.5),
        ("incredibly", 1.5),
        ("absolutely", 1.5),
        ("quite", 1.1),
        ("pretty", 1.1),
        ("somewhat", 0.8),
        ("slightly", 0.5),
    ]
    .iter()
    .cloned()
    .collect();
}

const NEGATIONS: &[&str] = &["not", "never", "no", "nothing", "neither", "nor", "without"];

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

/// Scores words from a built-in English lexicon of mostly adjectives.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl Score for LexiconScorer {
    fn score(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric() && c != '\'' && c != '’')
            .map(|x| x.trim_matches(|c| c == '\'' || c == '’'))
            .filter(|x| !x.is_empty())
            .collect();

        let mut contributions = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let (polarity, subjectivity) = match LEXICON.get(word) {
                Some(values) => *values,
                None => continue,
            };

            let intensity = i
                .checked_sub(1)
                .and_then(|j| INTENSIFIERS.get(words[j]))
                .copied()
                .unwrap_or(1.);
            let negated = words[i.saturating_sub(2)..i]
                .iter()
                .any(|x| is_negation(x));

            let mut polarity = (polarity * intensity).max(-1.).min(1.);
            let subjectivity = (subjectivity * intensity).max(0.).min(1.);
            if negated {
                polarity *= -0.5;
            }

            contributions.push((polarity, subjectivity));
        }

        if contributions.is_empty() {
            return Sentiment::default();
        }

        let n = contributions.len() as f32;
        let (polarity, subjectivity) = contributions
            .iter()
            .fold((0., 0.), |acc, x| (acc.0 + x.0, acc.1 + x.1));

        Sentiment::new(polarity / n, subjectivity / n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn single_word() {
        let sentiment = LexiconScorer.score("This is good.");
        assert_close(sentiment.polarity, 0.7);
        assert_close(sentiment.subjectivity, 0.6);
    }

    #[test]
    fn negation_flips_and_halves() {
        let sentiment = LexiconScorer.score("This is not good");
        assert_close(sentiment.polarity, -0.35);
        assert_close(sentiment.subjectivity, 0.6);

        assert_close(LexiconScorer.score("It isn't bad").polarity, 0.35);
    }

    #[test]
    fn intensifier_scales() {
        let sentiment = LexiconScorer.score("a very good day");
        assert_close(sentiment.polarity, 0.91);
        assert_close(sentiment.subjectivity, 0.78);

        // clamped at the upper bound
        let sentiment = LexiconScorer.score("extremely excellent");
        assert_close(sentiment.polarity, 1.0);
        assert_close(sentiment.subjectivity, 1.0);
    }

    #[test]
    fn averages_over_words() {
        let sentiment = LexiconScorer.score("The food was good but the service was bad");
        assert_close(sentiment.polarity, 0.0);
        assert_close(sentiment.subjectivity, (0.6 + 0.667) / 2.);
    }

    #[test]
    fn neutral_text() {
        assert_eq!(LexiconScorer.score("The table is wooden."), Sentiment::default());
        assert_eq!(LexiconScorer.score(""), Sentiment::default());
    }

    #[test]
    fn display() {
        assert_eq!(
            Sentiment::new(0.5, 0.25).to_string(),
            "Sentiment(polarity=0.5, subjectivity=0.25)"
        );
    }

    #[quickcheck]
    fn always_in_range(text: String) -> bool {
        let sentiment = LexiconScorer.score(&text);
        (-1. ..=1.).contains(&sentiment.polarity) && (0. ..=1.).contains(&sentiment.subjectivity)
    }
}
