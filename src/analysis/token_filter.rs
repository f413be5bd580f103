//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and return a
//! new one, dropping, reordering or adding tokens.
//!
//! # Available Filters
//!
//! - [`remove_empty::RemoveEmptyFilter`] - Removes tokens with empty text
//! - [`unique::UniqueFilter`] - Keeps the first occurrence of each token text
//! - [`candidate::CandidateFormFilter`] - Stacks candidate forms on each token
//! - [`limit::LimitFilter`] - Keeps the first N positions
//!
//! # Filter Chaining
//!
//! ```text
//! HebrewTokenizer → RemoveEmpty → Unique → CandidateForm → Limit
//! ```
//!
//! # Examples
//!
//! ```
//! use milon::analysis::token::Token;
//! use milon::analysis::token_filter::Filter;
//! use milon::analysis::token_filter::unique::UniqueFilter;
//!
//! let filter = UniqueFilter::new();
//! let tokens = vec![Token::new("ילד", 0), Token::new("הלך", 1), Token::new("ילד", 2)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();
//!
//! assert_eq!(filtered.len(), 2);
//! assert_eq!(filtered[1].text, "הלך");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod candidate;
pub mod limit;
pub mod remove_empty;
pub mod unique;

pub use candidate::CandidateFormFilter;
pub use limit::LimitFilter;
pub use remove_empty::RemoveEmptyFilter;
pub use unique::UniqueFilter;
