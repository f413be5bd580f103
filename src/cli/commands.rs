//! Command implementations for the Milon CLI.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info};

use crate::analysis::affix::AffixExpander;
use crate::analysis::analyzer::{Analyzer, HebrewAnalyzer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{MilonError, Result};
use crate::vocabulary::{
    KnownWord, MatcherConfig, ReadingHighlighter, VocabularyEntry, VocabularyMatcher,
    compose_source_text, merge_vocabulary, parse_generated_vocabulary,
};

/// Execute a CLI command.
pub fn execute_command(args: MilonArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => {
            let output = run_tokenize(tokenize_args)?;
            output_result("Tokens", &output, &args)
        }
        Command::Candidates(candidates_args) => {
            let output = run_candidates(candidates_args)?;
            output_result("Candidate forms", &output, &args)
        }
        Command::Match(match_args) => {
            let output = run_match(match_args)?;
            output_result("Vocabulary match", &output, &args)
        }
        Command::Highlight(highlight_args) => {
            let output = run_highlight(highlight_args)?;
            output_result("Reading view", &output, &args)
        }
    }
}

/// Tokenize the input text.
pub fn run_tokenize(args: &TokenizeArgs) -> Result<TokenizeOutput> {
    let text = read_input(&args.input)?;
    let mut analyzer = HebrewAnalyzer::with_options(args.unique, args.fold);
    if args.candidates {
        analyzer = analyzer.with_candidates(AffixExpander::new());
    }
    if let Some(limit) = args.limit {
        analyzer = analyzer.with_limit(limit);
    }

    let tokens = analyzer
        .analyze(&text)?
        .map(TokenOutput::from)
        .collect::<Vec<_>>();
    info!("{} tokens in {} bytes of input", tokens.len(), text.len());

    Ok(TokenizeOutput { tokens })
}

/// Expand a word into its candidate forms.
pub fn run_candidates(args: &CandidatesArgs) -> Result<CandidatesOutput> {
    let config = load_optional_config(args.config.as_deref())?;
    let expander = AffixExpander::with_config(config.affix)?;

    Ok(CandidatesOutput {
        forms: expander.candidate_forms(&args.word),
        word: args.word.clone(),
    })
}

/// Match the input text against a known-word file.
pub fn run_match(args: &MatchArgs) -> Result<MatchOutput> {
    let config = load_optional_config(args.config.as_deref())?;
    let limit = args.limit.unwrap_or(config.max_prompt_tokens);
    let matcher = VocabularyMatcher::with_config(config)?;

    let words = load_known_words(&args.words)?;
    let body = read_input(&args.input)?;
    let text = match &args.headline {
        Some(headline) => compose_source_text(headline, &body),
        None => body,
    };

    let (result, index) = matcher.match_text_with_stats(&text, &words);
    info!(
        "{} known, {} unknown",
        result.known_vocab.len(),
        result.unknown_tokens.len()
    );

    let vocabulary_words = match &args.generated {
        Some(path) => {
            let generated = load_generated_vocabulary(path)?;
            Some(merge_vocabulary(result.known_vocab.clone(), generated))
        }
        None => None,
    };

    Ok(MatchOutput {
        prompt_tokens: result.prompt_tokens(limit).to_vec(),
        result,
        vocabulary_words,
        index,
    })
}

/// Segment the input text for a reading view.
pub fn run_highlight(args: &HighlightArgs) -> Result<HighlightOutput> {
    let config = load_optional_config(args.config.as_deref())?;
    let matcher = VocabularyMatcher::with_config(config)?;

    let words = load_known_words(&args.words)?;
    let text = read_input(&args.input)?;
    let result = matcher.match_text(&text, &words);

    let generated = match &args.generated {
        Some(path) => load_generated_vocabulary(path)?,
        None => Vec::new(),
    };
    let vocabulary = merge_vocabulary(result.known_vocab.clone(), generated);

    let segments = ReadingHighlighter::new().highlight(&text, &result, &vocabulary)?;
    Ok(HighlightOutput { segments })
}

/// Read the text from the argument, the file, or standard input.
pub fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        debug!("reading text from {}", path.display());
        return Ok(fs::read_to_string(path)?);
    }

    debug!("reading text from standard input");
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Load known words from a JSON array or a JSON Lines file.
pub fn load_known_words(path: &Path) -> Result<Vec<KnownWord>> {
    let content = fs::read_to_string(path)?;

    let words = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<KnownWord>>(&content)?
    } else {
        let reader = BufReader::new(content.as_bytes());
        let mut words = Vec::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let word = serde_json::from_str::<KnownWord>(&line).map_err(|e| {
                MilonError::invalid_argument(format!(
                    "{} line {}: {e}",
                    path.display(),
                    line_num + 1
                ))
            })?;
            words.push(word);
        }
        words
    };

    debug!("loaded {} known words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a matcher configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<MatcherConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: MatcherConfig = serde_json::from_reader(reader)
        .map_err(|e| MilonError::config(format!("{}: {e}", path.display())))?;
    config.affix.validate()?;
    Ok(config)
}

fn load_optional_config(path: Option<&Path>) -> Result<MatcherConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(MatcherConfig::default()),
    }
}

/// Load entries from a saved generated-vocabulary response.
pub fn load_generated_vocabulary(path: &Path) -> Result<Vec<VocabularyEntry>> {
    let response = fs::read_to_string(path)?;
    parse_generated_vocabulary(&response)
}
