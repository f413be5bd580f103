//! Hebrew analyzer.
//!
//! Extracts niqqud-free Hebrew tokens with offsets into the input text.
//! Optionally deduplicates tokens and folds final letter-forms.
//!
//! # Examples
//!
//! ```
//! use milon::analysis::analyzer::Analyzer;
//! use milon::analysis::analyzer::hebrew::HebrewAnalyzer;
//!
//! let analyzer = HebrewAnalyzer::unique();
//! let tokens: Vec<_> = analyzer.analyze("הלך הלך לבית").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "הלך");
//! assert_eq!(tokens[1].text, "לבית");
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::analysis::affix::AffixExpander;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::FinalFormCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    CandidateFormFilter, LimitFilter, RemoveEmptyFilter, UniqueFilter,
};
use crate::analysis::tokenizer::HebrewTokenizer;
use crate::error::Result;

/// Analyzer producing Hebrew word tokens.
#[derive(Clone)]
pub struct HebrewAnalyzer {
    inner: PipelineAnalyzer,
}

impl HebrewAnalyzer {
    /// Every occurrence of every Hebrew token, niqqud removed.
    pub fn new() -> Self {
        Self::with_options(false, false)
    }

    /// First occurrence of each distinct token only.
    pub fn unique() -> Self {
        Self::with_options(true, false)
    }

    /// Build an analyzer with deduplication and/or final-form folding.
    pub fn with_options(unique: bool, fold_final_forms: bool) -> Self {
        let mut analyzer = PipelineAnalyzer::new(Arc::new(HebrewTokenizer::new()));

        if fold_final_forms {
            analyzer = analyzer.add_char_filter(Arc::new(FinalFormCharFilter::new()));
        }

        analyzer = analyzer.add_filter(Arc::new(RemoveEmptyFilter::new()));

        if unique {
            analyzer = analyzer.add_filter(Arc::new(UniqueFilter::new()));
        }

        HebrewAnalyzer {
            inner: analyzer.with_name("hebrew"),
        }
    }

    /// Stack the candidate forms of each token after it.
    pub fn with_candidates(mut self, expander: AffixExpander) -> Self {
        self.inner = self
            .inner
            .add_filter(Arc::new(CandidateFormFilter::with_expander(expander)));
        self
    }

    /// Stop after `limit` tokens of the text.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.inner = self.inner.add_filter(Arc::new(LimitFilter::new(limit)));
        self
    }
}

impl Default for HebrewAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for HebrewAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "hebrew"
    }
}

impl Debug for HebrewAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HebrewAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
