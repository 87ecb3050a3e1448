//! Configuration of the [App][crate::app::App]. Every field has a default so a config file only needs to
//! contain the values which should change, e. g.
//!
//! ```json
//! { "summary": { "count": 5 }, "wordcloud": { "width": 800, "height": 400 } }
//! ```

use fs_err::File;
use serde::{Deserialize, Serialize};
use std::{io::BufReader, path::Path};

use crate::{summarize::DEFAULT_COUNT, wordcloud::font, Error};

pub use crate::utils::regex::SerializeRegex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Number of words in a summary.
    pub count: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig {
            count: DEFAULT_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub endpoint: String,
    /// Texts with fewer characters are rejected before any request is made.
    pub min_length: usize,
    /// Texts must have fewer characters than this.
    pub max_length: usize,
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        TranslationConfig {
            endpoint: "https://translate.googleapis.com/translate_a/single".into(),
            min_length: 3,
            max_length: 5000,
            timeout_secs: 10,
        }
    }
}

/// Largest allowed width and height of a word cloud in pixels.
pub const MAX_CANVAS_SIDE: u32 = 8192;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCloudConfig {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    /// Smallest integer scale of the bitmap font. Layout stops once a word does not fit at this scale.
    pub min_scale: u32,
    /// Scale of the most frequent word.
    pub max_scale: u32,
    /// Free pixels around every word.
    pub margin: u32,
    /// How strongly the scale follows the word frequency. `0` only considers the rank, `1` makes
    /// a word with half the frequency half as large.
    pub relative_scaling: f32,
    pub background: [u8; 3],
    pub palette: Vec<[u8; 3]>,
    /// Pattern matching a word.
    pub token_pattern: SerializeRegex,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        WordCloudConfig {
            width: 400,
            height: 200,
            max_words: 200,
            min_scale: 1,
            max_scale: 8,
            margin: 2,
            relative_scaling: 0.5,
            background: [0, 0, 0],
            palette: vec![
                [68, 1, 84],
                [59, 82, 139],
                [33, 145, 140],
                [94, 201, 98],
                [253, 231, 37],
            ],
            token_pattern: SerializeRegex::new(r"\w[\w']+").expect("default pattern is valid"),
        }
    }
}

impl WordCloudConfig {
    /// Replaces the pattern matching a word. Fails if `pattern` is not a valid regex.
    pub fn set_token_pattern(&mut self, pattern: &str) -> Result<(), Error> {
        self.token_pattern = SerializeRegex::new(pattern)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Error> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(format!("wordcloud: {}", msg)));

        if self.width == 0 || self.height == 0 {
            return invalid("width and height must be positive");
        }
        if self.width > MAX_CANVAS_SIDE || self.height > MAX_CANVAS_SIDE {
            return invalid("width and height must not exceed 8192");
        }
        if self.min_scale == 0 || self.max_scale < self.min_scale {
            return invalid("scales must satisfy 0 < min_scale <= max_scale");
        }
        if self.max_scale > MAX_CANVAS_SIDE / font::GLYPH_HEIGHT {
            return invalid("max_scale is too large");
        }
        if self.margin > MAX_CANVAS_SIDE {
            return invalid("margin must not exceed 8192");
        }
        if !(0. ..=1.).contains(&self.relative_scaling) {
            return invalid("relative_scaling must be in [0, 1]");
        }
        if self.palette.is_empty() {
            return invalid("palette must not be empty");
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub summary: SummaryConfig,
    pub translation: TranslationConfig,
    pub wordcloud: WordCloudConfig,
    /// Words added to the English stopword list.
    pub extra_stopwords: Vec<String>,
}

impl Config {
    /// Reads a JSON config file.
    pub fn new<P: AsRef<Path>>(p: P) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(p.as_ref())?);
        let config: Config = serde_json::from_reader(reader)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.translation.min_length > self.translation.max_length {
            return Err(Error::InvalidConfig(
                "translation: min_length must not exceed max_length".into(),
            ));
        }

        self.wordcloud.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.summary.count, 3);
        assert_eq!(config.translation.min_length, 3);
        assert_eq!(config.wordcloud.token_pattern.as_str(), r"\w[\w']+");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "summary": { "count": 5 }, "wordcloud": { "width": 800 } }"#)
                .unwrap();

        assert_eq!(config.summary.count, 5);
        assert_eq!(config.wordcloud.width, 800);
        assert_eq!(config.wordcloud.height, 200);
        assert_eq!(config.translation, TranslationConfig::default());
    }

    #[test]
    fn rejects_invalid_values() {
        let mut config = Config::default();
        config.wordcloud.min_scale = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = Config::default();
        config.wordcloud.relative_scaling = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.wordcloud.width = 100_000;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = Config::default();
        config.wordcloud.height = MAX_CANVAS_SIDE;
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.wordcloud.max_scale = u32::MAX;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.translation.min_length = 10_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn token_pattern_must_compile() {
        let mut config = WordCloudConfig::default();

        assert!(matches!(config.set_token_pattern("[a-"), Err(Error::Regex(_))));
        config.set_token_pattern("[a-z]{3,}").unwrap();
        assert_eq!(config.token_pattern.as_str(), "[a-z]{3,}");
    }

    #[test]
    fn reads_file() -> Result<(), Error> {
        let tempdir = tempdir::TempDir::new("config_test")?;
        let path = tempdir.path().join("config.json");

        let mut file = std::fs::File::create(&path)?;
        write!(file, r#"{{ "extra_stopwords": ["foo"], "wordcloud": {{ "token_pattern": "[a-z]+" }} }}"#)?;

        let config = Config::new(&path)?;
        assert_eq!(config.extra_stopwords, vec!["foo".to_string()]);
        assert_eq!(config.wordcloud.token_pattern.as_str(), "[a-z]+");

        assert!(matches!(
            Config::new(tempdir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
        Ok(())
    }
}
