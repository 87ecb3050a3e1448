//! Basic NLP outputs for a piece of text.
//! # Overview
//!
//! nlpkit has the following core abstractions:
//! - [summarize][summarize::summarize]: a keyword "summary" made of the most frequent words of a text.
//! - [Filter][filter::Filter]s to remove stopwords, punctuation and special characters and to extract stopwords.
//! - An [Analyzer][tokenizer::Analyzer] splitting text into tokens and assigning a lemma to each token.
//!   Results are memoized per input text.
//! - A [LexiconScorer][sentiment::LexiconScorer] computing polarity and subjectivity.
//! - A [WordCloud][wordcloud::WordCloud] rendering the frequent words of a text to a raster image.
//! - A [Translator][translate::Translate] translating text into one of the supported [Language][translate::Language]s.
//! - An [App][app::App] tying everything together for the four modes of the command line tool.
//!
//! # Examples
//!
//! Summarize a text:
//!
//! ```
//! use nlpkit::summarize::summarize;
//!
//! assert_eq!(summarize("the cat sat on the mat the cat ran", 2), "the cat");
//! ```
//!
//! Analyze a text:
//!
//! ```no_run
//! use nlpkit::{app::App, config::Config};
//!
//! let app = App::new(Config::default())?;
//! let analysis = app.analyze_text("The cats were running around the garden.")?;
//!
//! println!("{}", analysis.summary);
//! for token in analysis.tokens.iter() {
//!     println!("{}", token);
//! }
//! # Ok::<(), nlpkit::Error>(())
//! ```

use std::io;

use thiserror::Error;

pub mod app;
pub mod config;
pub mod filter;
pub mod sentiment;
pub mod stats;
pub mod summarize;
pub mod tokenizer;
pub mod translate;
pub(crate) mod utils;
pub mod wordcloud;

pub use app::{App, Mode};
pub use config::Config;
pub use summarize::summarize;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// (De)serialization error. Can have occured while reading a config or a translation response.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Regex(#[from] onig::Error),
    #[error("Enter a text...")]
    EmptyInput,
    #[error("Please provide a text with at least {min} characters (got {len}).")]
    TooShort { min: usize, len: usize },
    #[error("Text must be shorter than {max} characters (got {len}).")]
    TooLong { max: usize, len: usize },
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown mode: {0}")]
    UnknownMode(String),
    #[error("malformed translation response: {0}")]
    Translation(String),
    #[error("need at least one word to plot a word cloud, got 0")]
    EmptyCloud,
}

impl Error {
    /// Whether this error is a problem with the user input rather than a failure of a component.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput | Error::TooShort { .. } | Error::TooLong { .. }
        )
    }

    /// Process exit status for this error. Validation errors are only warnings and exit with `0`.
    pub fn exit_code(&self) -> i32 {
        if self.is_validation() {
            0
        } else {
            1
        }
    }

    /// The message printed to the user, prefixed with `warning` or `error`.
    pub fn report(&self) -> String {
        let level = if self.is_validation() {
            "warning"
        } else {
            "error"
        };
        format!("{}: {}", level, self)
    }
}
