//! Hebrew script tables shared by the analysis components.
//!
//! Everything here is plain data: the Unicode ranges that delimit Hebrew
//! text and diacritics, the final letter-form table, and the prefix/suffix
//! tables used for candidate form generation.

use std::ops::RangeInclusive;

/// The Hebrew Unicode block. Runs of these code points form tokens.
pub const HEBREW_BLOCK: RangeInclusive<char> = '\u{0590}'..='\u{05FF}';

/// Niqqud, cantillation and other combining marks of the Hebrew block.
pub const NIQQUD: RangeInclusive<char> = '\u{0591}'..='\u{05C7}';

/// Regex pattern matching one maximal run of Hebrew block code points.
pub const HEBREW_RUN_PATTERN: &str = r"[\u{0590}-\u{05FF}]+";

/// Final letter-forms and their medial counterparts.
pub const FINAL_FORMS: [(char, char); 5] = [
    ('ך', 'כ'),
    ('ם', 'מ'),
    ('ן', 'נ'),
    ('ף', 'פ'),
    ('ץ', 'צ'),
];

/// Single-letter prefixes: conjunction, article and prepositions.
pub const PREFIXES: [&str; 7] = ["ו", "ה", "ב", "כ", "ל", "מ", "ש"];

/// Plural, possessive and pronoun suffixes, in matching order.
pub const SUFFIXES: [&str; 11] = [
    "ים", "ות", "ה", "י", "ך", "ו", "נו", "כם", "כן", "ם", "ן",
];

/// Number of prefix letters that may be stripped from one token.
pub const MAX_PREFIX_ROUNDS: usize = 2;

/// Returns true for any code point of the Hebrew block.
pub fn is_hebrew(c: char) -> bool {
    HEBREW_BLOCK.contains(&c)
}

/// Returns true for Hebrew diacritic marks.
pub fn is_niqqud(c: char) -> bool {
    NIQQUD.contains(&c)
}

/// Maps a final letter-form to its medial form; other characters pass through.
pub fn fold_final_form(c: char) -> char {
    FINAL_FORMS
        .iter()
        .find(|(final_form, _)| *final_form == c)
        .map(|(_, medial)| *medial)
        .unwrap_or(c)
}
