//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline after the char
//! filters: they split text into tokens carrying byte offsets into the
//! text they were given.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Emits every match of a regular expression
//! - [`hebrew::HebrewTokenizer`] - Emits runs of Hebrew script with niqqud removed
//!
//! # Examples
//!
//! ```
//! use milon::analysis::tokenizer::Tokenizer;
//! use milon::analysis::tokenizer::hebrew::HebrewTokenizer;
//!
//! let tokenizer = HebrewTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("שלום, world!").unwrap().collect();
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "שלום");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so one tokenizer can serve concurrent
/// matching calls.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod hebrew;
pub mod regex;

pub use self::hebrew::{HebrewTokenizer, tokenize};
pub use self::regex::RegexTokenizer;
