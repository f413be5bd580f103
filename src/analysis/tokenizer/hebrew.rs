//! Hebrew script tokenizer.
//!
//! A token is a maximal run of Hebrew block code points (U+0590..=U+05FF).
//! Latin text, digits, whitespace and punctuation never produce tokens.
//! Niqqud is removed from each run; offsets still point at the run in the
//! input, marks included, so a highlighter can wrap the vocalized span.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use super::Tokenizer;
use super::regex::RegexTokenizer;
use crate::analysis::char_filter::strip_niqqud;
use crate::analysis::hebrew::HEBREW_RUN_PATTERN;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;

lazy_static! {
    static ref HEBREW_RUN: Arc<Regex> =
        Arc::new(Regex::new(HEBREW_RUN_PATTERN).expect("Hebrew run pattern should be valid"));
}

/// Split `text` into niqqud-free Hebrew tokens, one per occurrence.
///
/// A run made only of diacritics strips to nothing and is skipped.
///
/// ```
/// use milon::analysis::tokenizer::tokenize;
///
/// assert_eq!(
///     tokenize("והילד הלך לבית הגדול."),
///     vec!["והילד", "הלך", "לבית", "הגדול"]
/// );
/// assert!(tokenize("hello world 123").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    HEBREW_RUN
        .find_iter(text)
        .map(|mat| strip_niqqud(mat.as_str()))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Tokenizer emitting runs of Hebrew script with niqqud removed.
///
/// Tokens keep the vocalized run as their original text when marks were
/// removed. Empty tokens (runs of bare marks) are emitted as-is; the
/// analyzers drop them with a `RemoveEmptyFilter`.
#[derive(Clone, Debug)]
pub struct HebrewTokenizer {
    inner: RegexTokenizer,
}

impl HebrewTokenizer {
    pub fn new() -> Self {
        HebrewTokenizer {
            inner: RegexTokenizer::from_regex(Arc::clone(&HEBREW_RUN))
                .with_token_type(TokenType::Hebrew),
        }
    }
}

impl Default for HebrewTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for HebrewTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .inner
            .tokenize(text)?
            .map(|token| {
                let stripped = strip_niqqud(&token.text);
                if stripped.len() == token.text.len() {
                    return token;
                }
                let original = token.text.clone();
                token.with_text(stripped).with_original_text(original)
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "hebrew"
    }
}
