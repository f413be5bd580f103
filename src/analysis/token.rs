//! Token types and utilities for text analysis.
//!
//! A [`Token`] is one Hebrew word as it flows through the analysis
//! pipeline: its (niqqud-stripped) text, its position in the stream and the
//! byte offsets of the span it came from in the original text.
//!
//! # Token Graphs
//!
//! Candidate forms are stacked on the token they were derived from by
//! giving them a `position_increment` of 0:
//!
//! ```text
//! Input: "והילד הלך"
//!
//! Token Graph:
//!   Position 0: "והילד" (pos_inc=1)
//!   Position 0: "הילד"  (pos_inc=0, candidate)
//!   Position 0: "ילד"   (pos_inc=0, candidate)
//!   Position 1: "הלך"   (pos_inc=1)
//!   Position 1: "הלכ"   (pos_inc=0, candidate)
//!   Position 1: "לכ"    (pos_inc=0, candidate)
//! ```
//!
//! # Examples
//!
//! ```
//! use milon::analysis::token::{Token, TokenType};
//!
//! let token = Token::with_offsets("ילד", 0, 0, 6).with_token_type(TokenType::Hebrew);
//! assert_eq!(token.text, "ילד");
//! assert_eq!(token.end_offset, 6);
//! assert_eq!(token.token_type(), Some(TokenType::Hebrew));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (default: 1).
    ///
    /// 0 places the token at the same position as the previous one, which
    /// is how candidate forms are attached to their source token.
    pub position_increment: usize,

    /// Additional metadata that can be attached to tokens
    pub metadata: Option<TokenMetadata>,
}

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// A run of Hebrew block code points
    Hebrew,
    /// A candidate form derived from another token by affix stripping
    Candidate,
    /// Anything else (e.g. produced by a custom regex tokenizer)
    Other,
}

/// Additional metadata that can be attached to tokens
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// The original text before filtering (e.g. the run with its niqqud)
    pub original_text: Option<String>,

    /// Token type classification
    pub token_type: Option<TokenType>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self::with_offsets(text, position, 0, 0)
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            position_increment: 1,
            metadata: None,
        }
    }

    /// Get the length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the text of this token, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set the original text in metadata.
    pub fn with_original_text<S: Into<String>>(mut self, original: S) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::default);
        metadata.original_text = Some(original.into());
        self
    }

    /// Set the token type in metadata.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::default);
        metadata.token_type = Some(token_type);
        self
    }

    /// The token type, if one was assigned.
    pub fn token_type(&self) -> Option<TokenType> {
        self.metadata.as_ref().and_then(|m| m.token_type)
    }

    /// The text before normalization, falling back to the token text.
    pub fn original_text(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.original_text.as_deref())
            .unwrap_or(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
