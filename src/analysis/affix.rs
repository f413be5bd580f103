//! Candidate form generation by heuristic affix stripping.
//!
//! Hebrew writes conjunctions, the definite article and most prepositions
//! as single-letter prefixes, and plural, possessive and pronoun markers as
//! suffixes. To decide whether a surface token is a known word in disguise
//! we generate a handful of "bare" guesses and look each of them up.
//!
//! For a token the candidate forms are, in order:
//!
//! 1. the normalized base form (niqqud stripped, final forms folded);
//! 2. the base with each matching suffix removed;
//! 3. up to [`MAX_PREFIX_ROUNDS`] prefix letters removed one at a time,
//!    each followed by its own suffix-stripped variants.
//!
//! Least-modified forms come first, so a lookup that takes the first hit
//! prefers the most conservative reading. This is not a stemmer and makes
//! no claim of linguistic correctness.
//!
//! ```
//! use milon::analysis::affix::candidate_forms;
//!
//! assert_eq!(candidate_forms("והילד"), vec!["והילד", "הילד", "ילד"]);
//! ```

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::normalize;
use crate::analysis::hebrew::{MAX_PREFIX_ROUNDS, PREFIXES, SUFFIXES};
use crate::error::{MilonError, Result};

lazy_static! {
    static ref DEFAULT_EXPANDER: AffixExpander = AffixExpander::new();
}

/// Candidate forms of `token` using the default affix tables.
pub fn candidate_forms(token: &str) -> Vec<String> {
    DEFAULT_EXPANDER.candidate_forms(token)
}

/// Prefix and suffix tables driving candidate generation.
///
/// The defaults are the fixed Hebrew tables in [`crate::analysis::hebrew`]
/// with two prefix rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AffixConfig {
    /// Prefixes tried in order; the first one the working form starts with is stripped.
    pub prefixes: Vec<String>,

    /// Suffixes tried in order; every one that matches yields a variant.
    pub suffixes: Vec<String>,

    /// Maximum number of prefixes stripped from one token.
    pub max_prefix_rounds: usize,
}

impl Default for AffixConfig {
    fn default() -> Self {
        AffixConfig {
            prefixes: PREFIXES.iter().map(|p| p.to_string()).collect(),
            suffixes: SUFFIXES.iter().map(|s| s.to_string()).collect(),
            max_prefix_rounds: MAX_PREFIX_ROUNDS,
        }
    }
}

impl AffixConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the prefix table.
    pub fn with_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the suffix table.
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number of prefix rounds.
    pub fn with_max_prefix_rounds(mut self, rounds: usize) -> Self {
        self.max_prefix_rounds = rounds;
        self
    }

    /// Reject empty table entries, which would match every form.
    pub fn validate(&self) -> Result<()> {
        if self.prefixes.iter().any(|p| p.is_empty()) {
            return Err(MilonError::config("prefix table contains an empty entry"));
        }
        if self.suffixes.iter().any(|s| s.is_empty()) {
            return Err(MilonError::config("suffix table contains an empty entry"));
        }
        Ok(())
    }
}

/// Generates candidate forms for tokens from an [`AffixConfig`].
#[derive(Debug, Clone, Default)]
pub struct AffixExpander {
    config: AffixConfig,
}

impl AffixExpander {
    /// Create an expander with the default Hebrew tables.
    pub fn new() -> Self {
        AffixExpander {
            config: AffixConfig::default(),
        }
    }

    /// Create an expander from a custom configuration.
    pub fn with_config(config: AffixConfig) -> Result<Self> {
        config.validate()?;
        Ok(AffixExpander { config })
    }

    pub fn config(&self) -> &AffixConfig {
        &self.config
    }

    /// Candidate forms of `token`, least-modified first, without duplicates
    /// or empty strings.
    pub fn candidate_forms(&self, token: &str) -> Vec<String> {
        let base = normalize(token);
        let mut forms = Vec::new();

        push_form(&mut forms, &base);
        self.strip_suffixes(&base, &mut forms);

        let mut working = base;
        for _ in 0..self.config.max_prefix_rounds {
            if working.chars().count() <= 2 {
                break;
            }
            let Some(prefix) = self
                .config
                .prefixes
                .iter()
                .find(|prefix| working.starts_with(prefix.as_str()))
            else {
                break;
            };

            working = working[prefix.len()..].to_string();
            push_form(&mut forms, &working);
            self.strip_suffixes(&working, &mut forms);
        }

        forms
    }

    /// Add `form` minus every matching suffix, as long as more than one
    /// character would remain.
    fn strip_suffixes(&self, form: &str, forms: &mut Vec<String>) {
        let len = form.chars().count();
        for suffix in &self.config.suffixes {
            if len > suffix.chars().count() + 1 && form.ends_with(suffix.as_str()) {
                push_form(forms, &form[..form.len() - suffix.len()]);
            }
        }
    }
}

fn push_form(forms: &mut Vec<String>, form: &str) {
    if !form.is_empty() && !forms.iter().any(|existing| existing == form) {
        forms.push(form.to_string());
    }
}
