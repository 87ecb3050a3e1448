//! The four modes of the tool and the [App] dispatching user input to the components.

use log::{info, warn};
use serde::Serialize;
use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    config::Config,
    filter::{FilterChain, Filterable, StopwordFilter, Stopwords},
    sentiment::{LexiconScorer, Score, Sentiment},
    stats::TextStats,
    summarize::summarize,
    tokenizer::{Analyzer, TokenLemma},
    translate::{GoogleTranslator, Language, Translate},
    wordcloud::{Cloud, WordCloud},
    Error,
};

const ABOUT: &str = "NLP toolkit

Paste a text and get
- basic statistics, the stopwords it contains and the text without them
- a word cloud of the remaining words
- tokens and their lemmas
- a keyword summary made of the most frequent words
- sentiment polarity and subjectivity
- a translation into Korean, Chinese, Japanese, English, German, Spanish, French or Italian";

/// Description shown in the About mode.
pub fn about() -> &'static str {
    ABOUT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    TextAnalysis,
    Translation,
    SentimentAnalysis,
    About,
}

impl Mode {
    /// All modes in menu order.
    pub const ALL: [Mode; 4] = [
        Mode::TextAnalysis,
        Mode::Translation,
        Mode::SentimentAnalysis,
        Mode::About,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::TextAnalysis => "Text Analysis",
            Mode::Translation => "Translation",
            Mode::SentimentAnalysis => "Sentiment Analysis",
            Mode::About => "About",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        Mode::ALL
            .iter()
            .find(|mode| {
                mode.name()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
                    == normalized
            })
            .copied()
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

/// Everything the Text Analysis mode shows for a text.
#[derive(Debug, Clone, Serialize)]
pub struct TextAnalysis {
    pub stats: TextStats,
    /// Stopwords in order of appearance.
    pub stopwords: Vec<String>,
    /// The text without stopwords.
    pub processed_text: String,
    /// Word cloud of the processed text. `None` if no word is left after removing stopwords.
    #[serde(skip)]
    pub cloud: Option<Cloud>,
    pub tokens: Arc<Vec<TokenLemma>>,
    pub summary: String,
}

pub struct App<T = GoogleTranslator> {
    config: Config,
    stopword_filter: StopwordFilter,
    lemma_filters: FilterChain,
    analyzer: Analyzer,
    scorer: LexiconScorer,
    wordcloud: WordCloud,
    translator: T,
}

impl App<GoogleTranslator> {
    pub fn new(config: Config) -> Result<Self, Error> {
        let translator = GoogleTranslator::new(&config.translation)?;
        App::with_translator(config, translator)
    }
}

impl<T: Translate> App<T> {
    pub fn with_translator(config: Config, translator: T) -> Result<Self, Error> {
        config.validate()?;

        let mut stopwords = Stopwords::english();
        stopwords.extend(&config.extra_stopwords);

        Ok(App {
            stopword_filter: StopwordFilter::new(stopwords.clone()),
            lemma_filters: FilterChain::for_lemmas(stopwords.clone()),
            analyzer: Analyzer::default(),
            scorer: LexiconScorer,
            wordcloud: WordCloud::new(config.wordcloud.clone(), stopwords)?,
            translator,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn analyze_text(&self, raw_text: &str) -> Result<TextAnalysis, Error> {
        if raw_text.is_empty() {
            return Err(Error::EmptyInput);
        }
        info!("{}: {} characters", Mode::TextAnalysis, raw_text.chars().count());

        let processed_text = self.stopword_filter.apply(raw_text);

        let cloud = match self.wordcloud.generate(&processed_text) {
            Ok(cloud) => Some(cloud),
            Err(Error::EmptyCloud) => {
                warn!("no words left for the word cloud");
                None
            }
            Err(e) => return Err(e),
        };

        let lemma_input = self.lemma_filters.apply(raw_text);

        Ok(TextAnalysis {
            stats: TextStats::new(raw_text, self.stopword_filter.stopwords()),
            stopwords: self
                .stopword_filter
                .extract(raw_text)
                .into_iter()
                .map(String::from)
                .collect(),
            processed_text,
            cloud,
            tokens: self.analyzer.analyze(&lemma_input),
            summary: summarize(raw_text, self.config.summary.count),
        })
    }

    /// Translates `raw_text` into the language with the given name or code.
    pub fn translate(&self, raw_text: &str, language: &str) -> Result<String, Error> {
        let len = raw_text.chars().count();
        let min = self.config.translation.min_length;
        if len < min {
            return Err(Error::TooShort { min, len });
        }

        let target: Language = language.parse()?;
        info!("{}: {} characters to {}", Mode::Translation, len, target);

        self.translator.translate(raw_text, target)
    }

    pub fn evaluate_sentiment(&self, raw_text: &str) -> Result<Sentiment, Error> {
        if raw_text.is_empty() {
            return Err(Error::EmptyInput);
        }
        info!("{}: {} characters", Mode::SentimentAnalysis, raw_text.chars().count());

        Ok(self.scorer.score(raw_text))
    }

    pub fn about(&self) -> &'static str {
        about()
    }
}
