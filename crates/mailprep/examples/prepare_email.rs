//! Prepare one email for a sequence model, and print its indices.
//!
//! ```terminaloutput
//! cargo run --example prepare_email -- --vocab word_to_index.json --input email.txt -vv
//! ```
use std::{
    fs::File,
    io::{BufReader, Read},
    sync::Arc,
};

use clap::Parser;
use mailprep::{
    PreparerOptions,
    StopWords,
    TextPreparer,
    stopwords::load_stop_words_path,
    vocab::io::load_vocab_path,
};
use stderrlog::LogLevelNum;

/// Logging arg group; logs go to stderr, indices to stdout.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output; `-vv` shows the filtered text and stream length.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LogArgs {
    /// Warnings by default; each `-v` adds a level.
    fn log_level(&self) -> LogLevelNum {
        match self.verbose {
            0 => LogLevelNum::Warn,
            1 => LogLevelNum::Info,
            2 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.log_level())
            .init()?;
        Ok(())
    }
}

/// Email preparation demo.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the vocabulary; `.json` or `{WORD} {INDEX}` text.
    #[arg(long)]
    pub vocab: String,

    /// Optional stop-word list; one word per line. Defaults to english.
    #[arg(long, default_value = None)]
    pub stop_words: Option<String>,

    /// Optional json preparer options.
    #[arg(long, default_value = None)]
    pub options: Option<String>,

    /// Optional input file; "-" or absent reads stdin.
    #[arg(long, default_value = None)]
    pub input: Option<String>,

    #[command(flatten)]
    pub logging: LogArgs,
}

fn read_input(input: &Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let mut text = String::new();
    match input.as_deref() {
        None | Some("-") => {
            std::io::stdin().lock().read_to_string(&mut text)?;
        }
        Some(path) => {
            BufReader::new(File::open(path)?).read_to_string(&mut text)?;
        }
    }
    Ok(text)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging()?;

    let options = match &args.options {
        Some(path) => PreparerOptions::load_json_path(path)?,
        None => PreparerOptions::default(),
    };

    let stop_words = match &args.stop_words {
        Some(path) => load_stop_words_path(path)?,
        None => StopWords::english(),
    };

    let vocab = load_vocab_path::<u32, _>(&args.vocab, &options.specials)?;

    let preparer = TextPreparer::new(Arc::new(vocab), Arc::new(stop_words), options)?;

    let text = read_input(&args.input)?;
    let batch = preparer.try_prepare(&text)?;

    let (rows, cols) = batch.shape();
    println!("shape: ({rows}, {cols})");
    let row = batch
        .as_slice()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{row}");

    Ok(())
}
