//! Word classification against the static word-class sets.

use std::collections::HashSet;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::WordClass;
use crate::vocabulary::{Vocabulary, WordClassLists};

/// Word sets built from the built-in vocabulary
static DEFAULT_WORD_SETS: Lazy<Arc<WordSets>> =
    Lazy::new(|| Arc::new(WordSets::from_lists(&Vocabulary::builtin().word_classes)));

const VERB_SUFFIXES: [&str; 3] = ["s", "ed", "ing"];

/// Lower-cased membership sets used by the classifier
#[derive(Debug, Clone)]
pub struct WordSets {
    time: HashSet<String>,
    subject: HashSet<String>,
    verb: HashSet<String>,
    object: HashSet<String>,
    keep: HashSet<String>,
    drop: HashSet<String>,
    short_word_limit: usize,
}

impl WordSets {
    pub fn from_lists(lists: &WordClassLists) -> Self {
        fn set(words: &[String]) -> HashSet<String> {
            words.iter().map(|w| w.trim().to_lowercase()).collect()
        }

        Self {
            time: set(&lists.time),
            subject: set(&lists.subject),
            verb: set(&lists.verb),
            object: set(&lists.object),
            keep: set(&lists.keep),
            drop: set(&lists.drop),
            short_word_limit: lists.short_word_limit,
        }
    }

    /// Process-wide sets from the built-in vocabulary
    pub fn builtin() -> Arc<WordSets> {
        Arc::clone(&DEFAULT_WORD_SETS)
    }

    pub fn is_drop_word(&self, word: &str) -> bool {
        self.drop.contains(&word.to_lowercase())
    }

    /// Verb or an inflection of one; `word` must be lower-case
    pub fn is_verb(&self, word: &str) -> bool {
        self.verb.contains(word)
            || VERB_SUFFIXES.iter().any(|suffix| {
                word.strip_suffix(suffix)
                    .is_some_and(|stem| self.verb.contains(stem))
            })
    }

    /// Object or its plural; `word` must be lower-case
    pub fn is_object(&self, word: &str) -> bool {
        self.object.contains(word)
            || word
                .strip_suffix('s')
                .is_some_and(|stem| self.object.contains(stem))
    }
}

/// Classifies normalized words into gloss buckets
#[derive(Debug, Clone)]
pub struct GlossClassifier {
    sets: Arc<WordSets>,
}

impl Default for GlossClassifier {
    fn default() -> Self {
        Self::new(WordSets::builtin())
    }
}

impl GlossClassifier {
    pub fn new(sets: Arc<WordSets>) -> Self {
        Self { sets }
    }

    pub fn word_sets(&self) -> &WordSets {
        &self.sets
    }

    /// Classify one word
    ///
    /// The class sets are tried in priority order TIME, SUBJECT, VERB, OBJECT.
    /// An unmatched word is dropped if it is in the drop set, kept if it is in
    /// the keep set, and otherwise kept only when longer than the short-word
    /// limit.
    pub fn classify(&self, word: &str) -> WordClass {
        let word = word.trim().to_lowercase();
        let sets = &self.sets;

        if sets.time.contains(&word) {
            return WordClass::Time;
        }
        if sets.subject.contains(&word) {
            return WordClass::Subject;
        }
        if sets.is_verb(&word) {
            return WordClass::Verb;
        }
        if sets.is_object(&word) {
            return WordClass::Object;
        }

        if sets.drop.contains(&word) {
            WordClass::Dropped
        } else if sets.keep.contains(&word) || word.chars().count() > sets.short_word_limit {
            WordClass::Other
        } else {
            WordClass::Dropped
        }
    }

    /// Classify each word, keeping the input order
    pub fn classify_all(&self, words: &[String]) -> Vec<(String, WordClass)> {
        words
            .iter()
            .map(|word| (word.clone(), self.classify(word)))
            .collect()
    }
}

/// Classify with the built-in word sets
pub fn classify(word: &str) -> WordClass {
    GlossClassifier::default().classify(word)
}
