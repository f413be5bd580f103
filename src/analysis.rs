//! Hebrew text analysis for Milon.
//!
//! Tokenization, normalization and candidate form generation. The layout
//! follows a classic analysis pipeline: char filters rewrite raw text, a
//! tokenizer splits it, token filters transform the token stream, and
//! analyzers bundle the three.

pub mod affix;
pub mod analyzer;
pub mod char_filter;
pub mod hebrew;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use affix::{AffixConfig, AffixExpander, candidate_forms};
pub use analyzer::{Analyzer, HebrewAnalyzer, PipelineAnalyzer};
pub use char_filter::{normalize, normalize_final_forms, strip_niqqud};
pub use token::{Token, TokenStream, TokenType};
pub use tokenizer::{Tokenizer, tokenize};
