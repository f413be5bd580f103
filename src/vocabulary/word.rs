//! Vocabulary value types.
//!
//! [`KnownWord`] is one entry of the learner's word bank as read from the
//! application's store. [`VocabularyEntry`] is what the matcher (or the
//! language model, for unknown tokens) returns for a token of the text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An entry in the learner's persisted vocabulary bank.
///
/// Deserializes from the store's JSON, which names fields either
/// `hebrewText`/`identifier`/`hasConjugations` or `hebrew`/`id` with a
/// `conjugations` payload:
///
/// ```
/// use milon::vocabulary::KnownWord;
///
/// let word: KnownWord = serde_json::from_str(
///     r#"{"hebrew": "ללכת", "translation": "caminar", "id": "3", "conjugations": [{}]}"#,
/// ).unwrap();
/// assert_eq!(word.hebrew_text, "ללכת");
/// assert!(word.has_conjugations);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredWord")]
pub struct KnownWord {
    /// The word as stored, usually without niqqud.
    pub hebrew_text: String,

    /// The learner's translation of the word.
    pub translation: String,

    /// Store identifier; two entries with the same identifier are one word.
    pub identifier: String,

    /// Whether conjugation tables exist for the word (i.e. it is a verb).
    pub has_conjugations: bool,
}

impl KnownWord {
    pub fn new<H, T, I>(hebrew_text: H, translation: T, identifier: I) -> Self
    where
        H: Into<String>,
        T: Into<String>,
        I: Into<String>,
    {
        KnownWord {
            hebrew_text: hebrew_text.into(),
            translation: translation.into(),
            identifier: identifier.into(),
            has_conjugations: false,
        }
    }

    /// Mark the word as having conjugation data.
    pub fn with_conjugations(mut self, has_conjugations: bool) -> Self {
        self.has_conjugations = has_conjugations;
        self
    }

    /// The word type hint given to tokens that match this word.
    pub fn word_type(&self) -> WordType {
        if self.has_conjugations {
            WordType::Verb
        } else {
            WordType::Other
        }
    }
}

/// Wire shape accepted for [`KnownWord`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredWord {
    #[serde(alias = "hebrew")]
    hebrew_text: String,
    translation: String,
    #[serde(alias = "id", alias = "_id")]
    identifier: String,
    #[serde(default)]
    has_conjugations: Option<bool>,
    #[serde(default)]
    conjugations: Option<Value>,
}

impl From<StoredWord> for KnownWord {
    fn from(stored: StoredWord) -> Self {
        let has_payload = stored.conjugations.as_ref().is_some_and(is_present);
        KnownWord {
            hebrew_text: stored.hebrew_text,
            translation: stored.translation,
            identifier: stored.identifier,
            has_conjugations: stored.has_conjugations.unwrap_or(false) || has_payload,
        }
    }
}

/// Whether a conjugation payload counts as present. Containers count even
/// when empty.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coarse word class attached to vocabulary entries.
///
/// The matcher only produces `Verb` and `Other`; generated entries may use
/// the finer classes. Unrecognized strings read as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Verb,
    Noun,
    Adjective,
    Adverb,
    #[serde(other)]
    Other,
}

impl WordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Verb => "verb",
            WordType::Noun => "noun",
            WordType::Adjective => "adjective",
            WordType::Adverb => "adverb",
            WordType::Other => "other",
        }
    }
}

/// A token of the text paired with its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    /// The token exactly as it appears in the text (niqqud removed).
    pub hebrew: String,

    pub translation: String,

    pub word_type: WordType,

    /// Infinitive of the verb the token belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infinitive: Option<String>,

    /// Pronunciation hint, present on generated entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
}

impl VocabularyEntry {
    pub fn new<H, T>(hebrew: H, translation: T, word_type: WordType) -> Self
    where
        H: Into<String>,
        T: Into<String>,
    {
        VocabularyEntry {
            hebrew: hebrew.into(),
            translation: translation.into(),
            word_type,
            infinitive: None,
            phonetic: None,
        }
    }

    /// Entry for `token` resolved to the known word `word`.
    pub fn from_match(token: &str, word: &KnownWord) -> Self {
        let mut entry = Self::new(token, word.translation.as_str(), word.word_type());
        if word.has_conjugations {
            entry.infinitive = Some(word.hebrew_text.clone());
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_canonical_shape() {
        let word: KnownWord = serde_json::from_str(
            r#"{"hebrewText": "ילד", "translation": "niño", "identifier": "1", "hasConjugations": false}"#,
        )
        .unwrap();

        assert_eq!(word, KnownWord::new("ילד", "niño", "1"));
    }

    #[test]
    fn test_deserialize_store_shape() {
        let word: KnownWord = serde_json::from_str(
            r#"{"_id": "k17", "hebrew": "לכתוב", "translation": "escribir", "conjugations": [], "createdAt": 1700000000}"#,
        )
        .unwrap();

        assert_eq!(word.identifier, "k17");
        assert_eq!(word.hebrew_text, "לכתוב");
        assert!(word.has_conjugations);
    }

    #[test]
    fn test_null_conjugations_is_not_a_verb() {
        let word: KnownWord = serde_json::from_str(
            r#"{"hebrew": "בית", "translation": "casa", "id": "2", "conjugations": null}"#,
        )
        .unwrap();
        assert!(!word.has_conjugations);
        assert_eq!(word.word_type(), WordType::Other);
    }

    #[test]
    fn test_serialize_round_trip_uses_camel_case() {
        let word = KnownWord::new("ללכת", "caminar", "3").with_conjugations(true);
        let json = serde_json::to_value(&word).unwrap();

        assert_eq!(json["hebrewText"], "ללכת");
        assert_eq!(json["hasConjugations"], true);

        let back: KnownWord = serde_json::from_value(json).unwrap();
        assert_eq!(back, word);
    }

    #[test]
    fn test_entry_from_match() {
        let verb = KnownWord::new("ללכת", "caminar", "3").with_conjugations(true);
        let entry = VocabularyEntry::from_match("הלכנו", &verb);
        assert_eq!(entry.word_type, WordType::Verb);
        assert_eq!(entry.infinitive.as_deref(), Some("ללכת"));

        let noun = KnownWord::new("ילד", "niño", "1");
        let entry = VocabularyEntry::from_match("והילד", &noun);
        assert_eq!(entry.hebrew, "והילד");
        assert_eq!(entry.translation, "niño");
        assert_eq!(entry.word_type, WordType::Other);
        assert!(entry.infinitive.is_none());
    }

    #[test]
    fn test_word_type_serde() {
        assert_eq!(serde_json::to_string(&WordType::Verb).unwrap(), r#""verb""#);
        let parsed: WordType = serde_json::from_str(r#""preposition""#).unwrap();
        assert_eq!(parsed, WordType::Other);
        assert_eq!(WordType::Adverb.as_str(), "adverb");
    }
}
