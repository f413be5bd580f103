//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::{MilonError, Result};

/// A tokenizer that emits every non-overlapping match of a pattern.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
    token_type: TokenType,
}

impl RegexTokenizer {
    /// Create a regex tokenizer from a pattern string.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| MilonError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(Self::from_regex(Arc::new(regex)))
    }

    /// Create a regex tokenizer sharing an already compiled pattern.
    pub fn from_regex(pattern: Arc<Regex>) -> Self {
        RegexTokenizer {
            pattern,
            token_type: TokenType::Other,
        }
    }

    /// Tag every emitted token with the given type.
    pub fn with_token_type(mut self, token_type: TokenType) -> Self {
        self.token_type = token_type;
        self
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let token_type = self.token_type;
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                    .with_token_type(token_type)
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_tokenizer() {
        let tokenizer = RegexTokenizer::with_pattern(r"\w+").unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 6);
        assert_eq!(tokens[1].end_offset, 11);
        assert_eq!(tokens[1].token_type(), Some(TokenType::Other));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = RegexTokenizer::with_pattern("[unclosed").unwrap_err();
        assert!(matches!(err, MilonError::Analysis(_)));
    }

    #[test]
    fn test_tokenizer_name() {
        let tokenizer = RegexTokenizer::with_pattern(r"\S+").unwrap();
        assert_eq!(tokenizer.name(), "regex");
        assert_eq!(tokenizer.pattern(), r"\S+");
    }
}
