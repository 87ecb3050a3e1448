//! Filters to clean up a text before further processing.

use enum_dispatch::enum_dispatch;
use lazy_static::lazy_static;
use onig::Regex;

mod stopwords;

pub use stopwords::Stopwords;

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Filter {
    StopwordFilter,
    PunctuationFilter,
    SpecialCharacterFilter,
}

#[enum_dispatch(Filter)]
pub trait Filterable {
    /// Returns the filtered text.
    fn apply(&self, text: &str) -> String;
}

/// Removes stopwords. The text is split on whitespace and the remaining words are joined with single spaces.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: Stopwords,
}

impl StopwordFilter {
    pub fn new(stopwords: Stopwords) -> Self {
        StopwordFilter { stopwords }
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// The whitespace-separated words of `text` which are stopwords, in order of appearance.
    pub fn extract<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_whitespace()
            .filter(|word| self.stopwords.contains(word))
            .collect()
    }
}

impl Filterable for StopwordFilter {
    fn apply(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.stopwords.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Removes ASCII punctuation.
#[derive(Debug, Clone, Default)]
pub struct PunctuationFilter;

impl Filterable for PunctuationFilter {
    fn apply(&self, text: &str) -> String {
        lazy_static! {
            static ref REGEX: Regex =
                Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~]"##).unwrap();
        }

        REGEX.replace_all(text, "")
    }
}

/// Removes everything except ASCII letters, digits and spaces.
#[derive(Debug, Clone, Default)]
pub struct SpecialCharacterFilter;

impl Filterable for SpecialCharacterFilter {
    fn apply(&self, text: &str) -> String {
        lazy_static! {
            static ref REGEX: Regex = Regex::new(r"[^A-Za-z0-9 ]+").unwrap();
        }

        REGEX.replace_all(text, "")
    }
}

/// Filters applied one after another.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    filters: Vec<Filter>,
}

impl FilterChain {
    pub fn new(filters: Vec<Filter>) -> Self {
        FilterChain { filters }
    }

    /// Removes stopwords, then punctuation, then special characters.
    /// This is the clean-up applied to a text before it is tokenized and lemmatized.
    pub fn for_lemmas(stopwords: Stopwords) -> Self {
        FilterChain::new(vec![
            StopwordFilter::new(stopwords).into(),
            PunctuationFilter.into(),
            SpecialCharacterFilter.into(),
        ])
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }
}

impl Filterable for FilterChain {
    fn apply(&self, text: &str) -> String {
        self.filters
            .iter()
            .fold(text.to_string(), |text, filter| filter.apply(&text))
    }
}
