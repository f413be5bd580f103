//! Analyzers that combine char filters, a tokenizer and token filters.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 … Filter N → Token Stream
//! ```
//!
//! # Available Implementations
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom char filter + tokenizer + filter chains
//! - [`hebrew::HebrewAnalyzer`] - Hebrew token extraction used by the matcher and highlighter
//!
//! # Examples
//!
//! ```
//! use milon::analysis::analyzer::Analyzer;
//! use milon::analysis::analyzer::hebrew::HebrewAnalyzer;
//!
//! let analyzer = HebrewAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("ילד, ילד!").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Token offsets always refer to the text passed to [`Analyzer::analyze`],
/// whatever char filters ran before tokenization.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod hebrew;
pub mod pipeline;

pub use hebrew::HebrewAnalyzer;
pub use pipeline::PipelineAnalyzer;
