//! Limit filter implementation.
//!
//! Caps the number of positions in a stream. Tokens stacked on a position
//! (`position_increment == 0`, e.g. candidate forms) stay with their source
//! token and do not count against the limit.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps the first `limit` positions of the stream.
#[derive(Clone, Debug)]
pub struct LimitFilter {
    limit: usize,
}

impl LimitFilter {
    /// Create a new limit filter with the given limit.
    pub fn new(limit: usize) -> Self {
        LimitFilter { limit }
    }

    /// Get the limit.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Filter for LimitFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let limit = self.limit;
        let mut positions = 0;
        let limited = tokens.take_while(move |token| {
            if token.position_increment > 0 {
                positions += 1;
            }
            positions <= limit
        });
        Ok(Box::new(limited))
    }

    fn name(&self) -> &'static str {
        "limit"
    }
}
