/*!
 * Sign catalog and alias table.
 *
 * Both are built once from a `Vocabulary` and are read-only afterwards, so a
 * `Lexicon` can be shared freely between threads behind an `Arc`.
 */

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::vocabulary::{SignSpec, Vocabulary};

pub mod aliases;

pub use aliases::{AliasEntry, AliasTable};

/// Lexicon built from the built-in vocabulary
static DEFAULT_LEXICON: Lazy<Arc<Lexicon>> =
    Lazy::new(|| Arc::new(Lexicon::from_vocabulary(Vocabulary::builtin())));

/// Metadata for one sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignEntry {
    /// Uppercase canonical word
    pub word: String,

    /// How the sign is formed
    pub description: String,

    /// Catalog category
    pub category: String,

    /// Usage example
    pub usage: String,

    /// Resource key of the sign graphic
    pub display_key: String,
}

impl SignEntry {
    /// Create an entry; the display key defaults to `asl_<word>`
    pub fn new(word: &str, description: &str, category: &str, usage: &str) -> Self {
        let word = word.trim().to_uppercase();
        let display_key = default_display_key(&word);
        Self {
            word,
            description: description.to_string(),
            category: category.to_string(),
            usage: usage.to_string(),
            display_key,
        }
    }

    fn from_spec(spec: &SignSpec) -> Self {
        let mut entry = Self::new(&spec.word, &spec.description, &spec.category, &spec.usage);
        if let Some(key) = spec.display_key.as_ref().filter(|k| !k.trim().is_empty()) {
            entry.display_key = key.clone();
        }
        entry
    }
}

impl std::fmt::Display for SignEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.word, self.description)
    }
}

fn default_display_key(word: &str) -> String {
    format!("asl_{}", word.to_lowercase())
}

/// Count of signs per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_signs: usize,
    pub per_category: BTreeMap<String, usize>,
}

impl std::fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total unique signs: {}", self.total_signs)?;
        writeln!(f, "Categories:")?;
        for (category, count) in &self.per_category {
            writeln!(f, "  {}: {} signs", category, count)?;
        }
        Ok(())
    }
}

/// Read-only catalog of signs keyed by uppercase canonical word
#[derive(Debug, Clone, Default)]
pub struct SignDictionary {
    entries: BTreeMap<String, SignEntry>,
}

impl SignDictionary {
    /// Build the catalog; a later entry for the same word replaces an earlier one
    pub fn from_entries(entries: impl IntoIterator<Item = SignEntry>) -> Self {
        let mut map = BTreeMap::new();
        for entry in entries {
            if let Some(previous) = map.insert(entry.word.clone(), entry) {
                warn!("Duplicate sign '{}' in catalog, keeping the last definition", previous.word);
            }
        }
        Self { entries: map }
    }

    /// Case-insensitive lookup
    pub fn get(&self, word: &str) -> Option<&SignEntry> {
        self.entries.get(&word.trim().to_uppercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in canonical-word order
    pub fn iter(&self) -> impl Iterator<Item = &SignEntry> {
        self.entries.values()
    }

    /// Entries of one category, compared case-insensitively
    pub fn signs_in_category(&self, category: &str) -> Vec<&SignEntry> {
        self.entries
            .values()
            .filter(|entry| entry.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Sorted list of distinct categories
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.entries.values().map(|entry| entry.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn stats(&self) -> CatalogStats {
        let mut per_category = BTreeMap::new();
        for entry in self.entries.values() {
            *per_category.entry(entry.category.clone()).or_insert(0) += 1;
        }
        CatalogStats {
            total_signs: self.entries.len(),
            per_category,
        }
    }
}

/// Sign catalog plus alias table
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub signs: SignDictionary,
    pub aliases: AliasTable,
}

impl Lexicon {
    /// Build a lexicon, logging aliases whose target is missing from the catalog
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        let signs = SignDictionary::from_entries(vocabulary.signs.iter().map(SignEntry::from_spec));
        let aliases = AliasTable::from_pairs(
            vocabulary
                .aliases
                .iter()
                .map(|a| (a.alias.as_str(), a.canonical.as_str())),
        );

        for entry in aliases.dangling_targets(&signs) {
            warn!(
                "Alias '{}' points to '{}', which is not in the sign catalog",
                entry.alias, entry.canonical
            );
        }

        info!(
            "Sign catalog initialized with {} signs and {} aliases",
            signs.len(),
            aliases.len()
        );

        Self { signs, aliases }
    }

    /// Process-wide lexicon built from the built-in vocabulary
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&DEFAULT_LEXICON)
    }
}
