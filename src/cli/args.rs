//! Command line argument parsing for the Milon CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Milon - Hebrew vocabulary matching for reading practice
#[derive(Parser, Debug, Clone)]
#[command(name = "milon")]
#[command(about = "Match Hebrew text against a learner's known vocabulary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MilonArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MilonArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Extract the Hebrew tokens of a text
    Tokenize(TokenizeArgs),

    /// Show the candidate forms of a word
    Candidates(CandidatesArgs),

    /// Match a text against a known-word file
    Match(MatchArgs),

    /// Segment a text for a reading view
    Highlight(HighlightArgs),
}

/// Where the text to analyze comes from. Standard input is read when
/// neither is given.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Keep only the first occurrence of each token
    #[arg(short, long)]
    pub unique: bool,

    /// Fold final letter-forms in token text
    #[arg(long)]
    pub fold: bool,

    /// List the candidate forms of each token after it
    #[arg(long)]
    pub candidates: bool,

    /// Stop after this many tokens
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for candidate form generation
#[derive(Parser, Debug, Clone)]
pub struct CandidatesArgs {
    /// Word to expand
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Matcher configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for matching
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Known-word file (JSON array or JSON Lines)
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub words: PathBuf,

    /// Headline prepended to the text
    #[arg(long)]
    pub headline: Option<String>,

    /// Matcher configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of unknown tokens to list for definition
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Generated vocabulary response to merge with the matched entries
    #[arg(short, long, value_name = "RESPONSE_FILE")]
    pub generated: Option<PathBuf>,
}

/// Arguments for highlighting
#[derive(Parser, Debug, Clone)]
pub struct HighlightArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Known-word file (JSON array or JSON Lines)
    #[arg(short, long, value_name = "WORDS_FILE")]
    pub words: PathBuf,

    /// Matcher configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Generated vocabulary response defining new words
    #[arg(short, long, value_name = "RESPONSE_FILE")]
    pub generated: Option<PathBuf>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
