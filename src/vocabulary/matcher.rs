//! Vocabulary matcher.
//!
//! Splits the Hebrew tokens of a text into vocabulary the learner already
//! has and tokens that still need a definition.
//!
//! # Algorithm
//!
//! 1. Tokenize the text and keep the first occurrence of each token.
//! 2. Index the known words by their candidate forms (first word wins).
//! 3. For each token, look its candidate forms up in order and take the
//!    first hit. Least-stripped forms come first, so a token is matched by
//!    the most conservative reading available.
//!
//! Matching is total: any input string yields a result and nothing is
//! mutated. Each call builds its own index, so concurrent calls need no
//! coordination.
//!
//! # Examples
//!
//! ```
//! use milon::vocabulary::{KnownWord, match_against_vocabulary};
//!
//! let words = vec![
//!     KnownWord::new("ילד", "niño", "1"),
//!     KnownWord::new("גדול", "grande", "2"),
//! ];
//! let result = match_against_vocabulary("והילד הלך לבית הגדול.", &words);
//!
//! assert_eq!(result.known_vocab[0].hebrew, "והילד");
//! assert_eq!(result.known_vocab[0].translation, "niño");
//! assert_eq!(result.unknown_tokens, vec!["הלך", "לבית"]);
//! assert_eq!(result.used_words.len(), 2);
//! ```

use ahash::{AHashMap, AHashSet};
use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::affix::{AffixConfig, AffixExpander};
use crate::analysis::tokenizer::tokenize;
use crate::error::Result;
use crate::vocabulary::index::{IndexStats, KnownWordIndex};
use crate::vocabulary::word::{KnownWord, VocabularyEntry};

/// Number of unknown tokens forwarded for definition by default.
pub const DEFAULT_MAX_PROMPT_TOKENS: usize = 30;

/// Unique Hebrew tokens of `text`, niqqud removed, in first-occurrence order.
pub fn tokenize_and_normalize(text: &str) -> Vec<String> {
    let mut seen = AHashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Match `text` against `known_words` with the default affix tables.
pub fn match_against_vocabulary(text: &str, known_words: &[KnownWord]) -> MatchResult {
    VocabularyMatcher::new().match_text(text, known_words)
}

/// Text that vocabulary is extracted from for a headline and its summary.
pub fn compose_source_text(headline: &str, summary: &str) -> String {
    format!("{headline} {summary}")
}

/// Configuration for a [`VocabularyMatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatcherConfig {
    /// Affix tables used for both known words and text tokens.
    pub affix: AffixConfig,

    /// Cap on the unknown tokens returned by [`VocabularyMatcher::prompt_tokens`].
    pub max_prompt_tokens: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            affix: AffixConfig::default(),
            max_prompt_tokens: DEFAULT_MAX_PROMPT_TOKENS,
        }
    }
}

impl MatcherConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_affix(mut self, affix: AffixConfig) -> Self {
        self.affix = affix;
        self
    }

    pub fn with_max_prompt_tokens(mut self, max_prompt_tokens: usize) -> Self {
        self.max_prompt_tokens = max_prompt_tokens;
        self
    }
}

/// Result of matching one text against a word bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Unique tokens in first-occurrence order.
    pub tokens: Vec<String>,

    /// Matched tokens with the translation of their known word, in token order.
    pub known_vocab: Vec<VocabularyEntry>,

    /// Tokens with no known word, in token order.
    pub unknown_tokens: Vec<String>,

    /// Distinct known words that matched at least one token.
    pub used_words: Vec<KnownWord>,
}

impl MatchResult {
    /// The first `limit` unknown tokens.
    pub fn prompt_tokens(&self, limit: usize) -> &[String] {
        &self.unknown_tokens[..self.unknown_tokens.len().min(limit)]
    }

    /// The known vocabulary entry for `token`, if it matched.
    pub fn known_entry(&self, token: &str) -> Option<&VocabularyEntry> {
        self.known_vocab.iter().find(|entry| entry.hebrew == token)
    }

    pub fn is_known(&self, token: &str) -> bool {
        self.known_entry(token).is_some()
    }
}

/// Matches texts against a learner's known words.
#[derive(Debug, Clone, Default)]
pub struct VocabularyMatcher {
    config: MatcherConfig,
    expander: AffixExpander,
}

impl VocabularyMatcher {
    /// Create a matcher with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher from a configuration, validating its affix tables.
    pub fn with_config(config: MatcherConfig) -> Result<Self> {
        let expander = AffixExpander::with_config(config.affix.clone())?;
        Ok(VocabularyMatcher { config, expander })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Build the index this matcher would use for `known_words`.
    pub fn build_index<'a>(&self, known_words: &'a [KnownWord]) -> KnownWordIndex<'a> {
        KnownWordIndex::build(known_words, &self.expander)
    }

    /// Match the Hebrew tokens of `text` against `known_words`.
    pub fn match_text(&self, text: &str, known_words: &[KnownWord]) -> MatchResult {
        self.match_text_with_stats(text, known_words).0
    }

    /// Like [`match_text`](Self::match_text), also returning index statistics.
    pub fn match_text_with_stats(
        &self,
        text: &str,
        known_words: &[KnownWord],
    ) -> (MatchResult, IndexStats) {
        let tokens = tokenize_and_normalize(text);
        let index = self.build_index(known_words);

        let mut known_vocab = Vec::new();
        let mut unknown_tokens = Vec::new();
        let mut used_words: Vec<KnownWord> = Vec::new();
        let mut used_slots: AHashMap<&str, usize> = AHashMap::new();

        for token in &tokens {
            let forms = self.expander.candidate_forms(token);
            match index.resolve(&forms) {
                Some(word) => {
                    trace!("{token:?} matched known word {:?}", word.identifier);
                    known_vocab.push(VocabularyEntry::from_match(token, word));

                    // One slot per identifier; a later word with the same
                    // identifier replaces the value but keeps the slot.
                    match used_slots.get(word.identifier.as_str()) {
                        Some(&slot) => used_words[slot] = word.clone(),
                        None => {
                            used_slots.insert(word.identifier.as_str(), used_words.len());
                            used_words.push(word.clone());
                        }
                    }
                }
                None => {
                    trace!("{token:?} is unknown");
                    unknown_tokens.push(token.clone());
                }
            }
        }

        debug!(
            "matched {} of {} tokens against {} known words",
            known_vocab.len(),
            tokens.len(),
            known_words.len()
        );

        let stats = index.stats();
        let result = MatchResult {
            tokens,
            known_vocab,
            unknown_tokens,
            used_words,
        };
        (result, stats)
    }

    /// Match several texts in parallel, each against its own index.
    ///
    /// Results are in the order of `texts`.
    pub fn match_batch<S>(&self, texts: &[S], known_words: &[KnownWord]) -> Vec<MatchResult>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.match_text(text.as_ref(), known_words))
            .collect()
    }

    /// Unknown tokens of `result`, capped at the configured prompt size.
    pub fn prompt_tokens<'r>(&self, result: &'r MatchResult) -> &'r [String] {
        result.prompt_tokens(self.config.max_prompt_tokens)
    }
}
