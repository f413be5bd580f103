//! Reading view segmentation.
//!
//! Splits a source text into consecutive segments that cover it exactly,
//! tagging each Hebrew token by what the learner knows about it.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, HebrewAnalyzer};
use crate::error::{MilonError, Result};
use crate::vocabulary::matcher::MatchResult;
use crate::vocabulary::word::VocabularyEntry;

/// How a segment is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Text between tokens.
    Plain,
    /// Token resolved against the word bank.
    Known,
    /// Token defined by the supplied vocabulary but not in the word bank.
    New,
    /// Token with no definition.
    Unknown,
}

/// A span of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// The span exactly as it appears in the source, niqqud included.
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub kind: SegmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl Segment {
    fn plain(source: &str, start: usize, end: usize) -> Self {
        Segment {
            text: source[start..end].to_string(),
            start,
            end,
            kind: SegmentKind::Plain,
            translation: None,
        }
    }

    pub fn is_token(&self) -> bool {
        self.kind != SegmentKind::Plain
    }
}

/// Produces [`Segment`]s for a text and its match result.
#[derive(Clone)]
pub struct ReadingHighlighter {
    analyzer: Arc<dyn Analyzer>,
}

impl ReadingHighlighter {
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(HebrewAnalyzer::new()))
    }

    /// Use a custom analyzer. Its token offsets must refer to the input text.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        ReadingHighlighter { analyzer }
    }

    /// Segment `text`.
    ///
    /// `result` must come from matching the same text. `vocabulary` holds
    /// definitions for tokens outside the word bank, typically generated
    /// entries merged with the known ones.
    pub fn highlight(
        &self,
        text: &str,
        result: &MatchResult,
        vocabulary: &[VocabularyEntry],
    ) -> Result<Vec<Segment>> {
        let mut definitions: AHashMap<&str, &VocabularyEntry> = AHashMap::new();
        for entry in vocabulary {
            definitions.entry(entry.hebrew.as_str()).or_insert(entry);
        }

        let mut segments = Vec::new();
        let mut cursor = 0;

        for token in self.analyzer.analyze(text)? {
            let (start, end) = (token.start_offset, token.end_offset);
            if start < cursor
                || end > text.len()
                || !text.is_char_boundary(start)
                || !text.is_char_boundary(end)
            {
                return Err(MilonError::analysis(format!(
                    "Token {:?} has offsets {start}..{end} outside the text",
                    token.text
                )));
            }

            if start > cursor {
                segments.push(Segment::plain(text, cursor, start));
            }

            let (kind, translation) = if let Some(entry) = result.known_entry(&token.text) {
                (SegmentKind::Known, Some(entry.translation.clone()))
            } else if let Some(entry) = definitions.get(token.text.as_str()) {
                (SegmentKind::New, Some(entry.translation.clone()))
            } else {
                (SegmentKind::Unknown, None)
            };

            segments.push(Segment {
                text: text[start..end].to_string(),
                start,
                end,
                kind,
                translation,
            });
            cursor = end;
        }

        if cursor < text.len() {
            segments.push(Segment::plain(text, cursor, text.len()));
        }

        Ok(segments)
    }
}

impl Default for ReadingHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ReadingHighlighter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadingHighlighter")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
