use lazy_static::lazy_static;
use nlpkit::{
    filter::{FilterChain, Filterable, Stopwords},
    sentiment::{LexiconScorer, Score},
    summarize::summarize,
    translate::{Language, Translate},
    App, Config, Error,
};
use quickcheck_macros::quickcheck;

struct EchoTranslator;

impl Translate for EchoTranslator {
    fn translate(&self, text: &str, target: Language) -> Result<String, Error> {
        Ok(format!("{}:{}", target.code(), text))
    }
}

lazy_static! {
    static ref APP: App<EchoTranslator> =
        App::with_translator(Config::default(), EchoTranslator).unwrap();
}

#[test]
fn summary_scenarios() {
    assert_eq!(summarize("the cat sat on the mat the cat ran", 2), "the cat");
    assert_eq!(summarize("Hello, World! 123", 5), "hello world");
    assert_eq!(summarize("Cat cat CAT dog", 1), "cat");
    assert_eq!(summarize("", 4), "");
    assert_eq!(summarize("anything at all", 0), "");
}

#[test]
fn text_analysis_end_to_end() {
    let text = "Rust is a language empowering everyone to build reliable and efficient software. \
                Rust is fast and Rust is memory-efficient.";
    let analysis = APP.analyze_text(text).unwrap();

    assert_eq!(analysis.summary, "rust is and");
    assert_eq!(analysis.stats.length, text.chars().count());
    assert!(analysis.stats.stopwords > 0);
    assert_eq!(analysis.stats.stopwords, analysis.stopwords.len());

    let cloud = analysis.cloud.expect("text contains content words");
    assert_eq!(cloud.placements[0].word, "rust");

    assert!(analysis
        .tokens
        .iter()
        .any(|x| x.token == "empowering" && x.lemma == "empower"));
}

#[test]
fn lemma_input_is_filtered() {
    let chain = FilterChain::for_lemmas(Stopwords::english());
    let cleaned = chain.apply("The cats, obviously, were sleeping!");

    assert!(!cleaned.contains(','));
    assert!(!cleaned.contains('!'));
    assert!(cleaned.contains("cats"));
}

#[test]
fn translation_routing() {
    assert_eq!(APP.translate("Good night", "Japanese").unwrap(), "ja:Good night");
    assert_eq!(APP.translate("Good night", "Chinese").unwrap(), "zh-CN:Good night");
    assert!(matches!(APP.translate("ok", "French"), Err(Error::TooShort { .. })));
}

#[test]
fn sentiment_of_mixed_review() {
    let sentiment = APP
        .evaluate_sentiment("The food was excellent but the waiter was rude and slow.")
        .unwrap();

    assert!(sentiment.polarity > 0.);
    assert!(sentiment.subjectivity > 0.);
    assert_eq!(sentiment, LexiconScorer.score("The food was excellent but the waiter was rude and slow."));
}

#[quickcheck]
fn can_analyze_anything(text: String) -> bool {
    match APP.analyze_text(&text) {
        Ok(analysis) => analysis.summary.split_whitespace().count() <= 3,
        Err(Error::EmptyInput) => text.is_empty(),
        Err(_) => false,
    }
}
