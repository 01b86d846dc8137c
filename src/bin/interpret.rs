//! Show how utterances are interpreted, without a game.
//!
//! `interpret "night to f three" "where are my rooks"`

use clap::Parser;
use tracing_subscriber::EnvFilter;

use voice_chess::speech::{matching_rule, Normalizer};

#[derive(Debug, Parser)]
#[command(name = "interpret", about = "Normalize and classify transcripts")]
struct Cli {
    /// Transcripts to interpret
    #[arg(required = true)]
    utterances: Vec<String>,

    /// Extra `wrong=right` corrections applied after the built-in homophones
    #[arg(long = "correct", value_parser = parse_correction)]
    corrections: Vec<(String, String)>,
}

fn parse_correction(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((wrong, right)) if !wrong.is_empty() => Ok((wrong.to_string(), right.to_string())),
        _ => Err(format!("expected wrong=right, got {s:?}")),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let normalizer = Normalizer::new(cli.corrections);

    for heard in &cli.utterances {
        let text = normalizer.normalize(heard);
        println!("heard:      {heard}");
        println!("normalized: {text}");
        match matching_rule(&text) {
            Some((rule, intent)) => println!("rule:       {}\nintent:     {intent:?}", rule.name),
            None => println!("rule:       (none)\nintent:     unrecognized"),
        }
        println!();
    }
}
