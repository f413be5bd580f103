//! Known-word index.
//!
//! Maps every candidate form of every known word to the first word, in the
//! caller's order, that produced it. A later word whose form is already
//! taken is not recorded for that form (it may still own other forms).
//! The index borrows the word slice and is meant to be rebuilt per call.

use std::collections::hash_map::Entry;

use ahash::AHashMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::analysis::affix::AffixExpander;
use crate::vocabulary::word::KnownWord;

/// Counters describing a built index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Known words folded into the index.
    pub words: usize,
    /// Distinct forms in the index.
    pub forms: usize,
    /// Forms dropped because an earlier word already owned them.
    pub collisions: usize,
}

/// Lookup from candidate form to the known word owning it.
#[derive(Debug, Clone)]
pub struct KnownWordIndex<'a> {
    words: &'a [KnownWord],
    owners: AHashMap<String, usize>,
    order: Vec<String>,
    stats: IndexStats,
}

impl<'a> KnownWordIndex<'a> {
    /// Build the index over `words` with the given expander.
    pub fn build(words: &'a [KnownWord], expander: &AffixExpander) -> Self {
        let mut owners = AHashMap::new();
        let mut order = Vec::new();
        let mut collisions = 0;

        for (position, word) in words.iter().enumerate() {
            for form in expander.candidate_forms(&word.hebrew_text) {
                match owners.entry(form) {
                    Entry::Vacant(entry) => {
                        order.push(entry.key().clone());
                        entry.insert(position);
                    }
                    Entry::Occupied(entry) => {
                        collisions += 1;
                        trace!(
                            "form {:?} of {:?} already owned by {:?}",
                            entry.key(),
                            word.identifier,
                            words[*entry.get()].identifier
                        );
                    }
                }
            }
        }

        let stats = IndexStats {
            words: words.len(),
            forms: order.len(),
            collisions,
        };
        debug!(
            "indexed {} forms from {} known words ({} collisions)",
            stats.forms, stats.words, stats.collisions
        );

        KnownWordIndex {
            words,
            owners,
            order,
            stats,
        }
    }

    /// The known word owning `form`, if any.
    pub fn get(&self, form: &str) -> Option<&'a KnownWord> {
        self.owners.get(form).map(|&position| &self.words[position])
    }

    /// First known word hit by any of `forms`, trying them in order.
    pub fn resolve<S: AsRef<str>>(&self, forms: &[S]) -> Option<&'a KnownWord> {
        forms.iter().find_map(|form| self.get(form.as_ref()))
    }

    pub fn contains(&self, form: &str) -> bool {
        self.owners.contains_key(form)
    }

    /// Forms with their owners, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a KnownWord)> + '_ {
        self.order
            .iter()
            .map(|form| (form.as_str(), &self.words[self.owners[form]]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<KnownWord> {
        vec![
            KnownWord::new("ילד", "niño", "1"),
            KnownWord::new("גדול", "grande", "2"),
            KnownWord::new("ללכת", "caminar", "3").with_conjugations(true),
        ]
    }

    #[test]
    fn test_build_index() {
        let words = words();
        let index = KnownWordIndex::build(&words, &AffixExpander::new());

        assert_eq!(index.get("ילד").unwrap().identifier, "1");
        assert_eq!(index.get("גדול").unwrap().identifier, "2");
        assert_eq!(index.get("ללכת").unwrap().identifier, "3");
        assert_eq!(index.get("לכת").unwrap().identifier, "3");
        assert_eq!(index.get("כת").unwrap().identifier, "3");
        assert!(index.get("הלכ").is_none());

        assert_eq!(index.len(), 5);
        assert_eq!(
            index.stats(),
            IndexStats {
                words: 3,
                forms: 5,
                collisions: 0
            }
        );
    }

    #[test]
    fn test_first_word_wins_on_collision() {
        // "הבית" expands to הבית, בית, ית; "בית" to בית, ית.
        let words = vec![
            KnownWord::new("הבית", "la casa", "a"),
            KnownWord::new("בית", "casa", "b"),
            KnownWord::new("ביתי", "mi casa", "c"),
        ];
        let index = KnownWordIndex::build(&words, &AffixExpander::new());

        assert_eq!(index.get("בית").unwrap().identifier, "a");
        assert_eq!(index.get("ית").unwrap().identifier, "a");
        // "ביתי" keeps ביתי and יתי; its forms בית and ית collide.
        assert_eq!(index.get("ביתי").unwrap().identifier, "c");
        assert_eq!(index.get("יתי").unwrap().identifier, "c");
        assert_eq!(index.stats().collisions, 4);
    }

    #[test]
    fn test_resolve_takes_first_hit() {
        let words = words();
        let index = KnownWordIndex::build(&words, &AffixExpander::new());

        let hit = index.resolve(&["והילד", "הילד", "ילד"]).unwrap();
        assert_eq!(hit.translation, "niño");
        assert!(index.resolve(&["הלכ", "לכ"]).is_none());
        assert!(index.resolve::<&str>(&[]).is_none());
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let words = words();
        let index = KnownWordIndex::build(&words, &AffixExpander::new());

        let forms: Vec<&str> = index.iter().map(|(form, _)| form).collect();
        assert_eq!(forms, vec!["ילד", "גדול", "ללכת", "לכת", "כת"]);
    }

    #[test]
    fn test_empty_word_list() {
        let index = KnownWordIndex::build(&[], &AffixExpander::new());
        assert!(index.is_empty());
        assert_eq!(index.stats(), IndexStats::default());
    }

    #[test]
    fn test_build_does_not_touch_input() {
        let words = words();
        let before = words.clone();
        let _ = KnownWordIndex::build(&words, &AffixExpander::new());
        assert_eq!(words, before);
    }
}
