//! Merging matched vocabulary with generated entries.
//!
//! Tokens the word bank could not resolve are sent to a language model,
//! which answers with a JSON object holding a `vocabularyWords` array.
//! The answer is often wrapped in prose or code fences, so parsing looks
//! only at the text between the first `{` and the last `}`.

use ahash::AHashSet;
use log::{debug, warn};
use serde_json::Value;

use crate::error::Result;
use crate::vocabulary::word::VocabularyEntry;

/// Field of the generated object holding the entries.
pub const GENERATED_VOCABULARY_FIELD: &str = "vocabularyWords";

/// Concatenate `known` and `generated`, keeping the first entry per `hebrew`.
pub fn merge_vocabulary<K, G>(known: K, generated: G) -> Vec<VocabularyEntry>
where
    K: IntoIterator<Item = VocabularyEntry>,
    G: IntoIterator<Item = VocabularyEntry>,
{
    let mut seen = AHashSet::new();
    let mut merged = Vec::new();
    for entry in known.into_iter().chain(generated) {
        if seen.insert(entry.hebrew.clone()) {
            merged.push(entry);
        }
    }
    merged
}

/// Parse the entries out of a generated response.
///
/// Entries without a non-empty `hebrew`, `translation` and `wordType` are
/// skipped. A response without a `vocabularyWords` array yields no entries.
/// Returns an error only when the extracted object is not valid JSON.
pub fn parse_generated_vocabulary(response: &str) -> Result<Vec<VocabularyEntry>> {
    let value: Value = serde_json::from_str(extract_object(response))?;

    let Some(items) = value.get(GENERATED_VOCABULARY_FIELD).and_then(Value::as_array) else {
        debug!("generated response has no {GENERATED_VOCABULARY_FIELD} array");
        return Ok(Vec::new());
    };

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        if !has_required_fields(item) {
            debug!("skipping incomplete generated entry {item}");
            continue;
        }
        match serde_json::from_value::<VocabularyEntry>(item.clone()) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("skipping malformed generated entry: {e}"),
        }
    }

    debug!("parsed {} of {} generated entries", entries.len(), items.len());
    Ok(entries)
}

fn extract_object(response: &str) -> &str {
    match (response.find('{'), response.rfind('}')) {
        (Some(start), Some(end)) if end > start => &response[start..=end],
        _ => response,
    }
}

fn has_required_fields(item: &Value) -> bool {
    ["hebrew", "translation", "wordType"].iter().all(|field| {
        item.get(field)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    })
}
