//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text before it reaches the tokenizer and
//! report every change they make as a [`Transformation`], so the pipeline
//! can map token offsets back onto the original text.
//!
//! # Available Filters
//!
//! - [`niqqud::NiqqudCharFilter`] - Removes Hebrew diacritics
//! - [`final_form::FinalFormCharFilter`] - Folds final letter-forms to medial forms
//!
//! The same operations are available as plain functions:
//!
//! ```
//! use milon::analysis::char_filter::{normalize, normalize_final_forms, strip_niqqud};
//!
//! assert_eq!(strip_niqqud("שָׁלוֹם"), "שלום");
//! assert_eq!(normalize_final_forms("שלום"), "שלומ");
//! assert_eq!(normalize("שָׁלוֹם"), "שלומ");
//! ```

pub mod final_form;
pub mod niqqud;

pub use final_form::{FinalFormCharFilter, normalize_final_forms};
pub use niqqud::{NiqqudCharFilter, strip_niqqud};

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// Returns the filtered text and the transformations, ordered by
    /// position, that describe how it differs from the input.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

/// Strip niqqud and fold final letter-forms.
///
/// This is the comparison form used for vocabulary lookups. It is
/// idempotent.
pub fn normalize(text: &str) -> String {
    normalize_final_forms(&strip_niqqud(text))
}
