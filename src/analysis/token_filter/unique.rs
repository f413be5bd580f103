//! Deduplicating filter implementation.

use ahash::AHashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only the first occurrence of each token text.
///
/// Tokens are compared by exact text after tokenization, so "ילד" and
/// "הילד" are distinct. Order of first occurrence is preserved.
#[derive(Clone, Debug, Default)]
pub struct UniqueFilter;

impl UniqueFilter {
    pub fn new() -> Self {
        UniqueFilter
    }
}

impl Filter for UniqueFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut seen = AHashSet::new();
        let unique: Vec<Token> = tokens
            .filter(|token| seen.insert(token.text.clone()))
            .collect();

        Ok(Box::new(unique.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unique"
    }
}
