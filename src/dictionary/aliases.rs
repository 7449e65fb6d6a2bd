//! Alternate spellings mapped to canonical catalog words.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SignDictionary;

/// One alias and the catalog word it stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub alias: String,
    pub canonical: String,
}

/// Read-only alias table keyed by uppercase alias
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: BTreeMap<String, AliasEntry>,
}

impl AliasTable {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(alias, canonical)| {
                let entry = AliasEntry {
                    alias: alias.trim().to_uppercase(),
                    canonical: canonical.trim().to_uppercase(),
                };
                (entry.alias.clone(), entry)
            })
            .collect();
        Self { entries }
    }

    /// Canonical word for an alias, case-insensitive
    pub fn canonical_for(&self, alias: &str) -> Option<&str> {
        self.entries
            .get(&alias.trim().to_uppercase())
            .map(|entry| entry.canonical.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.values()
    }

    /// Aliases whose canonical word is missing from `signs`
    pub fn dangling_targets(&self, signs: &SignDictionary) -> Vec<&AliasEntry> {
        self.entries
            .values()
            .filter(|entry| !signs.contains(&entry.canonical))
            .collect()
    }
}
