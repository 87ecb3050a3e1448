//! Machine translation into one of the supported [Language]s. The source language is always detected
//! automatically.

use lazy_static::lazy_static;
use log::{debug, info};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::HashMap, fmt, str::FromStr, time::Duration};

use crate::{config::TranslationConfig, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Korean,
    Chinese,
    Japanese,
    English,
    German,
    Spanish,
    French,
    Italian,
}

lazy_static! {
    /// Lowercase names and codes of every language.
    static ref LOOKUP: HashMap<String, Language> = Language::ALL
        .iter()
        .flat_map(|lang| {
            vec![
                (lang.name().to_lowercase(), *lang),
                (lang.code().to_lowercase(), *lang),
            ]
        })
        .collect();
}

impl Language {
    /// All languages in the order they are offered to the user.
    pub const ALL: [Language; 8] = [
        Language::Korean,
        Language::Chinese,
        Language::Japanese,
        Language::English,
        Language::German,
        Language::Spanish,
        Language::French,
        Language::Italian,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::Korean => "Korean",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::English => "English",
            Language::German => "German",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Italian => "Italian",
        }
    }

    /// The code the translation service expects.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::Chinese => "zh-CN",
            Language::Japanese => "ja",
            Language::English => "en",
            Language::German => "de",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Italian => "it",
        }
    }

    /// Looks up a language by its human-readable name or its code, ignoring case.
    pub fn from_name(name: &str) -> Option<Language> {
        LOOKUP.get(&name.trim().to_lowercase()).copied()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_name(s).ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

/// Something that translates text.
pub trait Translate {
    fn translate(&self, text: &str, target: Language) -> Result<String, Error>;
}

impl<'a, T> Translate for &'a T
where
    T: Translate,
{
    fn translate(&self, text: &str, target: Language) -> Result<String, Error> {
        (*self).translate(text, target)
    }
}

/// Client for the public Google Translate endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    max_length: usize,
}

impl GoogleTranslator {
    pub fn new(config: &TranslationConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(GoogleTranslator {
            client,
            endpoint: config.endpoint.clone(),
            max_length: config.max_length,
        })
    }
}

impl Translate for GoogleTranslator {
    fn translate(&self, text: &str, target: Language) -> Result<String, Error> {
        let len = text.chars().count();
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        if len >= self.max_length {
            return Err(Error::TooLong {
                max: self.max_length,
                len,
            });
        }

        info!("translating {} characters to {}", len, target.code());

        let body = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?
            .error_for_status()?
            .text()?;

        debug!("translation response: {}", body);

        parse_response(&body)
    }
}

/// Extracts the translation from a response of the form `[[["translated", "source", ...], ...], ...]`.
/// Long texts are translated in several segments which are concatenated.
pub(crate) fn parse_response(body: &str) -> Result<String, Error> {
    let value: Value = serde_json::from_str(body)?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Translation("expected a list of segments".into()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(Error::Translation("no translated segment".into()));
    }

    Ok(translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(Language::from_name("Japanese").map(|x| x.code()), Some("ja"));
        assert_eq!(Language::from_name("Chinese").map(|x| x.code()), Some("zh-CN"));
        assert_eq!(Language::from_name("Korean").map(|x| x.code()), Some("ko"));
        assert_eq!(Language::from_name("Italian").map(|x| x.code()), Some("it"));
    }

    #[test]
    fn lookup_ignores_case_and_accepts_codes() {
        assert_eq!(Language::from_name(" german "), Some(Language::German));
        assert_eq!(Language::from_name("ZH-cn"), Some(Language::Chinese));
        assert_eq!(Language::from_name("fr"), Some(Language::French));
        assert_eq!(Language::from_name("Klingon"), None);

        assert!(matches!(
            "Klingon".parse::<Language>(),
            Err(Error::UnknownLanguage(x)) if x == "Klingon"
        ));
    }

    #[test]
    fn names_round_trip() {
        for lang in Language::ALL.iter() {
            assert_eq!(Language::from_name(lang.name()), Some(*lang));
            assert_eq!(Language::from_name(&lang.to_string()), Some(*lang));
        }
    }

    #[test]
    fn parses_segments() {
        let body = r#"[[["Hallo Welt. ","Hello world. ",null,null,10],["Wie geht es?","How are you?",null,null,10]],null,"en"]"#;
        assert_eq!(parse_response(body).unwrap(), "Hallo Welt. Wie geht es?");
    }

    #[test]
    fn rejects_malformed_responses() {
        assert!(matches!(parse_response("{}"), Err(Error::Translation(_))));
        assert!(matches!(parse_response("[[]]"), Err(Error::Translation(_))));
        assert!(matches!(parse_response("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn validates_length_before_requesting() {
        let config = TranslationConfig {
            endpoint: "http://127.0.0.1:9/unreachable".into(),
            max_length: 10,
            ..TranslationConfig::default()
        };
        let translator = GoogleTranslator::new(&config).unwrap();

        assert!(matches!(
            translator.translate("   ", Language::German),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            translator.translate("a much longer text", Language::German),
            Err(Error::TooLong { max: 10, len: 18 })
        ));
    }
}
