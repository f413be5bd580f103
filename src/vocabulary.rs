//! Matching text against a learner's vocabulary.
//!
//! [`matcher`] resolves the Hebrew tokens of a text against known words,
//! [`merge`] combines the result with generated entries, and [`highlight`]
//! turns both into a segmented reading view.

pub mod highlight;
pub mod index;
pub mod matcher;
pub mod merge;
pub mod word;

pub use highlight::{ReadingHighlighter, Segment, SegmentKind};
pub use index::{IndexStats, KnownWordIndex};
pub use matcher::{
    MatchResult, MatcherConfig, VocabularyMatcher, compose_source_text,
    match_against_vocabulary, tokenize_and_normalize,
};
pub use merge::{merge_vocabulary, parse_generated_vocabulary};
pub use word::{KnownWord, VocabularyEntry, WordType};
