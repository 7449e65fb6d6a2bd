/*!
 * English-to-gloss conversion.
 *
 * A recognized utterance goes through four steps:
 * - `normalizer`: lower-case, split and strip punctuation
 * - `classifier`: assign each word to a gloss bucket or drop it
 * - `reorderer`: rebuild the words in TIME, SUBJECT, OBJECT, VERB, OTHER order
 * - `consolidation`: merge known two-word phrases into single tokens
 *
 * Every step is a pure function of its input and the read-only vocabulary.
 */

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::vocabulary::Vocabulary;

pub mod classifier;
pub mod consolidation;
pub mod normalizer;
pub mod reorderer;

pub use classifier::{classify, GlossClassifier, WordSets};
pub use consolidation::{PhraseRule, PhraseTable};
pub use normalizer::normalize;
pub use reorderer::reorder;

/// Gloss bucket of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Time,
    Subject,
    Verb,
    Object,
    Other,
    Dropped,
}

impl WordClass {
    pub fn is_kept(self) -> bool {
        self != WordClass::Dropped
    }
}

/// Ordered uppercase gloss tokens for one utterance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlossSequence(Vec<String>);

impl GlossSequence {
    /// Wrap tokens, uppercasing them and discarding empty ones
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self(
            tokens
                .into_iter()
                .map(|t| t.trim().to_uppercase())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.0
    }
}

impl std::fmt::Display for GlossSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl<'a> IntoIterator for &'a GlossSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Intermediate results of a conversion, kept for display and statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossConversion {
    /// Normalized lower-case words
    pub normalized: Vec<String>,

    /// Each normalized word with its class
    pub classified: Vec<(String, WordClass)>,

    /// Reordered gloss before consolidation
    pub reordered: GlossSequence,

    /// Final gloss
    pub gloss: GlossSequence,
}

/// Runs normalize → classify → reorder → consolidate
#[derive(Debug, Clone)]
pub struct GlossConverter {
    classifier: GlossClassifier,
    phrases: PhraseTable,
}

impl Default for GlossConverter {
    fn default() -> Self {
        Self::new(
            GlossClassifier::default(),
            PhraseTable::from_specs(&Vocabulary::builtin().phrases),
        )
    }
}

impl GlossConverter {
    pub fn new(classifier: GlossClassifier, phrases: PhraseTable) -> Self {
        Self { classifier, phrases }
    }

    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self::new(
            GlossClassifier::new(Arc::new(WordSets::from_lists(&vocabulary.word_classes))),
            PhraseTable::from_specs(&vocabulary.phrases),
        )
    }

    pub fn classifier(&self) -> &GlossClassifier {
        &self.classifier
    }

    pub fn phrases(&self) -> &PhraseTable {
        &self.phrases
    }

    /// Convert text and keep every intermediate step
    pub fn convert(&self, text: &str) -> GlossConversion {
        let normalized = normalize(text);
        let classified = self.classifier.classify_all(&normalized);
        let reordered = reorder(&classified);
        let gloss = self.phrases.consolidate(&reordered);

        debug!("Gloss for \"{}\": {}", text, gloss);

        GlossConversion {
            normalized,
            classified,
            reordered,
            gloss,
        }
    }

    /// Convert text straight to its final gloss
    pub fn to_gloss(&self, text: &str) -> GlossSequence {
        self.convert(text).gloss
    }
}
