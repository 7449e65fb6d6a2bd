/*!
 * Vocabulary data for the speech-to-sign pipeline.
 *
 * A vocabulary bundles every piece of static configuration the pipeline reads:
 * - the word-class sets used by the gloss classifier
 * - the two-word consolidation phrases
 * - the alias table
 * - the sign catalog
 * - the affixes and separators tried by the resolver
 *
 * The built-in vocabulary is compiled into the binary. A JSON file with the same
 * schema can replace it at startup; nothing mutates a vocabulary once loaded.
 */

use std::collections::HashSet;
use std::path::Path;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::VocabularyError;
use crate::gloss::WordSets;

mod builtin;
mod signs;

/// The built-in vocabulary, built once on first use
static BUILTIN_VOCABULARY: Lazy<Vocabulary> = Lazy::new(Vocabulary::compiled_in);

/// Word lists driving gloss classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordClassLists {
    /// Time references, moved to the front of a gloss
    pub time: Vec<String>,

    /// Subject pronouns
    pub subject: Vec<String>,

    /// Verbs, also matched with "s", "ed" and "ing" endings
    pub verb: Vec<String>,

    /// Objects, also matched with a plural "s"
    pub object: Vec<String>,

    /// Words that are always kept even when short
    pub keep: Vec<String>,

    /// Grammar words that never reach the gloss
    pub drop: Vec<String>,

    /// Unclassified words with at most this many characters are dropped
    #[serde(default = "default_short_word_limit")]
    pub short_word_limit: usize,
}

/// A two-word phrase merged into a single gloss token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhraseSpec {
    pub first: String,
    pub second: String,
    pub canonical: String,
}

/// An alternate spelling pointing at a canonical catalog word
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliasSpec {
    pub alias: String,
    pub canonical: String,
}

/// A sign as written in a vocabulary file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignSpec {
    /// Canonical word, stored uppercase
    pub word: String,

    /// How the sign is formed
    pub description: String,

    /// Catalog category (e.g. "Greetings")
    pub category: String,

    /// When the sign is used
    #[serde(default)]
    pub usage: String,

    /// Resource key of the sign graphic, derived from the word when absent
    #[serde(default)]
    pub display_key: Option<String>,
}

/// Affixes and separators tried by the resolver's fallback steps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AffixRules {
    /// Suffixes stripped in order (e.g. "ING", "ED")
    pub suffixes: Vec<String>,

    /// Prefixes stripped in order (e.g. "RE", "UN")
    pub prefixes: Vec<String>,

    /// Characters that split a compound token
    pub separators: Vec<char>,
}

impl Default for AffixRules {
    fn default() -> Self {
        builtin::affix_rules()
    }
}

/// Complete static vocabulary for the pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vocabulary {
    /// Word-class sets for the gloss classifier
    pub word_classes: WordClassLists,

    /// Two-word consolidation phrases
    #[serde(default)]
    pub phrases: Vec<PhraseSpec>,

    /// Alias table
    #[serde(default)]
    pub aliases: Vec<AliasSpec>,

    /// Sign catalog
    pub signs: Vec<SignSpec>,

    /// Resolver affixes
    #[serde(default)]
    pub affixes: AffixRules,
}

impl Vocabulary {
    /// Get the built-in vocabulary
    pub fn builtin() -> &'static Vocabulary {
        &BUILTIN_VOCABULARY
    }

    fn compiled_in() -> Self {
        Self {
            word_classes: builtin::word_classes(),
            phrases: builtin::phrases(),
            aliases: builtin::aliases(),
            signs: signs::catalog(),
            affixes: builtin::affix_rules(),
        }
    }

    /// Parse and validate a vocabulary from a JSON string
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let vocabulary: Vocabulary =
            serde_json::from_str(json).map_err(|e| VocabularyError::Parse(e.to_string()))?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Load and validate a vocabulary from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let content = std::fs::read_to_string(path).map_err(|e| VocabularyError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let vocabulary = Self::from_json(&content)?;
        debug!(
            "Loaded vocabulary from {:?}: {} signs, {} aliases, {} phrases",
            path,
            vocabulary.signs.len(),
            vocabulary.aliases.len(),
            vocabulary.phrases.len()
        );
        Ok(vocabulary)
    }

    /// Check the invariants the pipeline relies on
    ///
    /// - no empty words anywhere
    /// - the drop set shares no word with the class sets or the keep set, and
    ///   holds no inflection the classifier would read as a verb or object, so
    ///   a dropped word can never end up in a gloss
    /// - no consolidation rule produces a drop word
    /// - no consolidation rule produces a token that is itself a phrase word,
    ///   so a second consolidation pass never merges anything
    pub fn validate(&self) -> Result<(), VocabularyError> {
        let classes = &self.word_classes;
        let lists: [(&'static str, &Vec<String>); 6] = [
            ("time", &classes.time),
            ("subject", &classes.subject),
            ("verb", &classes.verb),
            ("object", &classes.object),
            ("keep", &classes.keep),
            ("drop", &classes.drop),
        ];
        for &(name, words) in lists.iter() {
            if words.iter().any(|w| w.trim().is_empty()) {
                return Err(VocabularyError::EmptyEntry(name));
            }
        }

        let dropped: HashSet<String> = classes.drop.iter().map(|w| w.trim().to_lowercase()).collect();
        for &(name, words) in &lists[..5] {
            if let Some(word) = words.iter().find(|w| dropped.contains(&w.to_lowercase())) {
                return Err(VocabularyError::DropConflict {
                    word: word.clone(),
                    set: name,
                });
            }
        }

        let sets = WordSets::from_lists(classes);
        for word in &classes.drop {
            let lower = word.trim().to_lowercase();
            let set = if sets.is_verb(&lower) {
                "verb"
            } else if sets.is_object(&lower) {
                "object"
            } else {
                continue;
            };
            return Err(VocabularyError::DropConflict {
                word: word.clone(),
                set,
            });
        }

        let phrase_words: HashSet<String> = self
            .phrases
            .iter()
            .flat_map(|p| [p.first.to_uppercase(), p.second.to_uppercase()])
            .collect();
        for phrase in &self.phrases {
            if phrase.first.trim().is_empty()
                || phrase.second.trim().is_empty()
                || phrase.canonical.trim().is_empty()
            {
                return Err(VocabularyError::EmptyEntry("phrases"));
            }
            if dropped.contains(&phrase.canonical.trim().to_lowercase()) {
                return Err(VocabularyError::DropConflict {
                    word: phrase.canonical.clone(),
                    set: "phrase",
                });
            }
            if phrase_words.contains(&phrase.canonical.to_uppercase()) {
                return Err(VocabularyError::ChainedPhrase {
                    first: phrase.first.clone(),
                    second: phrase.second.clone(),
                    canonical: phrase.canonical.clone(),
                });
            }
        }

        if self
            .aliases
            .iter()
            .any(|a| a.alias.trim().is_empty() || a.canonical.trim().is_empty())
        {
            return Err(VocabularyError::EmptyEntry("aliases"));
        }
        if self.signs.iter().any(|s| s.word.trim().is_empty()) {
            return Err(VocabularyError::EmptyEntry("signs"));
        }

        Ok(())
    }

    /// Serialize to pretty JSON, the format read by `from_json`
    pub fn to_json(&self) -> Result<String, VocabularyError> {
        serde_json::to_string_pretty(self).map_err(|e| VocabularyError::Parse(e.to_string()))
    }
}

fn default_short_word_limit() -> usize {
    2
}
