//! Candidate form filter implementation.
//!
//! Expands every token into the token itself followed by its candidate
//! forms, stacked at the same position. Handy for inspecting what the
//! matcher will look up for a given text.

use crate::analysis::affix::AffixExpander;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream, TokenType};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Filter that stacks candidate forms on their source token.
#[derive(Clone, Debug, Default)]
pub struct CandidateFormFilter {
    expander: AffixExpander,
}

impl CandidateFormFilter {
    /// Create a filter using the default affix tables.
    pub fn new() -> Self {
        CandidateFormFilter {
            expander: AffixExpander::new(),
        }
    }

    /// Create a filter with a custom expander.
    pub fn with_expander(expander: AffixExpander) -> Self {
        CandidateFormFilter { expander }
    }
}

impl Filter for CandidateFormFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut expanded = Vec::new();

        for token in tokens {
            let forms = self.expander.candidate_forms(&token.text);
            let candidates: Vec<Token> = forms
                .into_iter()
                .filter(|form| *form != token.text)
                .map(|form| {
                    token
                        .clone()
                        .with_text(form)
                        .with_position_increment(0)
                        .with_token_type(TokenType::Candidate)
                })
                .collect();

            expanded.push(token);
            expanded.extend(candidates);
        }

        Ok(expanded.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "candidate_form"
    }
}
