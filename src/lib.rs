//! # Milon
//!
//! Hebrew vocabulary matching for reading practice.
//!
//! ## Features
//!
//! - Hebrew tokenization with niqqud removal
//! - Final letter-form folding
//! - Prefix and suffix stripping into candidate forms
//! - Matching tokens against a learner's known words
//! - Merging with generated vocabulary and reading-view highlighting
//!
//! ```
//! use milon::prelude::*;
//!
//! let words = vec![KnownWord::new("ילד", "niño", "1")];
//! let result = match_against_vocabulary("והילד הלך", &words);
//!
//! assert_eq!(result.known_vocab[0].translation, "niño");
//! assert_eq!(result.unknown_tokens, vec!["הלך"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod vocabulary;

pub use vocabulary::{match_against_vocabulary, tokenize_and_normalize};

pub mod prelude {
    pub use crate::analysis::{
        AffixConfig, AffixExpander, Analyzer, HebrewAnalyzer, Token, candidate_forms, normalize,
        strip_niqqud, tokenize,
    };
    pub use crate::error::{MilonError, Result};
    pub use crate::vocabulary::{
        KnownWord, MatchResult, MatcherConfig, ReadingHighlighter, Segment, SegmentKind,
        VocabularyEntry, VocabularyMatcher, WordType, compose_source_text,
        match_against_vocabulary, merge_vocabulary, parse_generated_vocabulary,
        tokenize_and_normalize,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
