//! Small tokenizer built on the ctype predicates
//!
//! Splits text into identifiers, numbers, punctuation runs, brackets and
//! line ends. Tokenizing is client code; the library only classifies.
//!
//! Run with: cargo run --features cli --example tokenize -- tokens "x = 1.5e3 + y_2;"

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use ctype::{
    is_alnum_or_any_of, is_blank, is_digit, is_endline, is_ident, is_ident_start,
    is_punct_and_none_of, Classifier, ClassifyConfig,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "ctype tokenizer - classify and split ASCII text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Split text into tokens
    Tokens {
        /// Text to tokenize; reads stdin when omitted
        text: Option<String>,
    },
    /// Print the category of every character
    Classify {
        /// Text to classify; reads stdin when omitted
        text: Option<String>,

        /// Report letters as a single alpha category
        #[arg(long)]
        fold_case: bool,

        /// Report line feed as space
        #[arg(long)]
        merge_endline: bool,

        /// JSON file with a classifier config; flags are applied on top
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },
    /// Count characters per category
    Histogram {
        /// Text to count; reads stdin when omitted
        text: Option<String>,
    },
}

#[cfg(feature = "cli")]
const BRACKETS: &[char] = &['(', ')', '[', ']', '{', '}', ',', ';'];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Ident,
    Number,
    Operator,
    Bracket,
    Endline,
    Other,
}

#[cfg(feature = "cli")]
fn tokenize(text: &str) -> Vec<(TokenKind, &str)> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let b = bytes[pos];

        let kind = if is_blank(b) {
            pos += 1;
            continue;
        } else if is_endline(b) {
            pos += 1;
            TokenKind::Endline
        } else if is_ident_start(b) {
            pos += bytes[pos..].iter().take_while(|&&b| is_ident(b)).count();
            TokenKind::Ident
        } else if is_digit(b) {
            pos += bytes[pos..]
                .iter()
                .take_while(|&&b| is_alnum_or_any_of(b, &['.', '_']))
                .count();
            TokenKind::Number
        } else if is_punct_and_none_of(b, BRACKETS) {
            pos += bytes[pos..]
                .iter()
                .take_while(|&&b| is_punct_and_none_of(b, BRACKETS) && b != b'_')
                .count();
            TokenKind::Operator
        } else if BRACKETS.contains(&(b as char)) {
            pos += 1;
            TokenKind::Bracket
        } else {
            // Keep multi-byte UTF-8 sequences whole.
            let width = text[pos..].chars().next().map_or(1, char::len_utf8);
            pos += width;
            TokenKind::Other
        };

        tokens.push((kind, &text[start..pos]));
    }

    tracing::debug!(tokens = tokens.len(), bytes = bytes.len(), "tokenized input");
    tokens
}

#[cfg(feature = "cli")]
fn read_input(text: &Option<String>) -> std::io::Result<String> {
    match text {
        Some(text) => Ok(text.clone()),
        None => std::io::read_to_string(std::io::stdin()),
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ctype=info,tokenize=info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Tokens { text } => {
            let input = read_input(text)?;
            for (kind, token) in tokenize(&input) {
                println!("{kind:?}\t{token:?}");
            }
        }
        Commands::Classify {
            text,
            fold_case,
            merge_endline,
            config,
        } => {
            let input = read_input(text)?;
            let mut config = match config {
                Some(path) => ClassifyConfig::from_json(&std::fs::read_to_string(path)?)?,
                None => ClassifyConfig::default(),
            };
            if *fold_case {
                config = config.with_fold_case(true);
            }
            if *merge_endline {
                config = config.with_split_endline(false);
            }
            tracing::debug!(?config, "classifier config");
            let classifier = Classifier::new(config);
            for (ch, category) in input.chars().zip(classifier.classify_str(&input)) {
                println!("{ch:?}\t{category}");
            }
        }
        Commands::Histogram { text } => {
            let input = read_input(text)?;
            let counts = Classifier::default().histogram(&input);
            for (category, count) in counts.iter() {
                println!("{category:>10} {count}");
            }
            println!("{:>10} {}", "total", counts.total());
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example tokenize");
    std::process::exit(1);
}
