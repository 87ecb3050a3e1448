use clap::{Parser, Subcommand};
use log::warn;
use nlpkit::{
    app::{about, Mode},
    summarize::summarize,
    translate::Language,
    App, Config, Error,
};
use std::{
    io::{self, Read},
    path::PathBuf,
    process,
};

#[derive(Parser)]
#[clap(version, about = "Basic NLP outputs for a text.")]
struct Opts {
    /// JSON config file. Missing values use the defaults.
    #[clap(long, short, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stats, stopwords, processed text, word cloud, tokens & lemmas and summary.
    Analyze {
        /// Text to analyze. Read from stdin if missing.
        text: Option<String>,
        /// Write the word cloud to this PNG file.
        #[clap(long)]
        cloud: Option<PathBuf>,
    },
    /// Translate into another language.
    Translate {
        text: Option<String>,
        /// Target language, e. g. "Japanese" or "ja".
        #[clap(long, short)]
        to: String,
    },
    /// Polarity and subjectivity.
    Sentiment { text: Option<String> },
    /// The most frequent words.
    Summarize {
        text: Option<String>,
        /// Number of words. Defaults to the configured count.
        #[clap(long, short = 'n')]
        count: Option<usize>,
    },
    /// List the modes and target languages.
    Modes,
    About,
}

fn read_text(text: Option<String>) -> Result<String, Error> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim_end_matches(&['\r', '\n'][..]).to_string())
        }
    }
}

fn run(opts: Opts) -> Result<(), Error> {
    let config = match &opts.config {
        Some(path) => Config::new(path)?,
        None => Config::default(),
    };
    let json = opts.json;

    match opts.command {
        Command::Analyze { text, cloud } => {
            let app = App::new(config)?;
            let analysis = app.analyze_text(&read_text(text)?)?;

            if let (Some(path), Some(image)) = (&cloud, &analysis.cloud) {
                image.save(path)?;
            } else if cloud.is_some() {
                warn!("no words left for the word cloud, nothing written");
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("== Text Stats");
                println!("{}", serde_json::to_string_pretty(&analysis.stats)?);
                println!("== Stop Words List");
                println!("{:?}", analysis.stopwords);
                println!("== Stopwords Excluded Text");
                println!("{}", analysis.processed_text);
                println!("== Tokens & Lemmas");
                for token in analysis.tokens.iter() {
                    println!("{}", token);
                }
                println!("== Summary");
                println!("{}", analysis.summary);
            }
        }
        Command::Translate { text, to } => {
            let app = App::new(config)?;
            let translated = app.translate(&read_text(text)?, &to)?;

            if json {
                println!("{}", serde_json::json!({ "translation": translated }));
            } else {
                println!("{}", translated);
            }
        }
        Command::Sentiment { text } => {
            let app = App::new(config)?;
            let sentiment = app.evaluate_sentiment(&read_text(text)?)?;

            if json {
                println!("{}", serde_json::to_string(&sentiment)?);
            } else {
                println!("{}", sentiment);
            }
        }
        Command::Summarize { text, count } => {
            let count = count.unwrap_or(config.summary.count);
            println!("{}", summarize(&read_text(text)?, count));
        }
        Command::Modes => {
            for mode in Mode::ALL.iter() {
                println!("{}", mode);
            }
            println!();
            for lang in Language::ALL.iter() {
                println!("{}\t{}", lang, lang.code());
            }
        }
        Command::About => println!("{}", about()),
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    if let Err(error) = run(opts) {
        eprintln!("{}", error.report());
        process::exit(error.exit_code());
    }
}
