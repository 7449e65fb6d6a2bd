/*!
 * Resolution strategies for the sign fallback chain.
 *
 * Each strategy is one step of the chain. `SignResolver` tries them in order and
 * stops at the first hit, so adding a new fallback means adding a type here and
 * inserting it into the chain.
 */

use std::fmt::Debug;

use log::debug;

use super::MatchKind;
use crate::dictionary::{Lexicon, SignEntry};
use crate::vocabulary::AffixRules;

/// One step of the fallback chain
pub trait ResolutionStrategy: Send + Sync + Debug {
    /// Match kind recorded when this strategy hits
    fn kind(&self) -> MatchKind;

    /// Try to find a sign for an uppercase token
    ///
    /// # Arguments
    /// * `token` - Trimmed, uppercase gloss token
    /// * `lexicon` - Catalog and alias table to search
    ///
    /// # Returns
    /// * `Option<&SignEntry>` - The catalog entry on a hit
    fn attempt<'a>(&self, token: &str, lexicon: &'a Lexicon) -> Option<&'a SignEntry>;
}

/// Exact catalog match
#[derive(Debug, Default, Clone)]
pub struct DirectMatch;

impl ResolutionStrategy for DirectMatch {
    fn kind(&self) -> MatchKind {
        MatchKind::Direct
    }

    fn attempt<'a>(&self, token: &str, lexicon: &'a Lexicon) -> Option<&'a SignEntry> {
        lexicon.signs.get(token)
    }
}

/// Alias table lookup followed by a catalog lookup of the canonical word
#[derive(Debug, Default, Clone)]
pub struct AliasMatch;

impl ResolutionStrategy for AliasMatch {
    fn kind(&self) -> MatchKind {
        MatchKind::Alias
    }

    fn attempt<'a>(&self, token: &str, lexicon: &'a Lexicon) -> Option<&'a SignEntry> {
        let canonical = lexicon.aliases.canonical_for(token)?;
        let entry = lexicon.signs.get(canonical);
        if entry.is_none() {
            debug!("Alias '{}' -> '{}' has no catalog entry", token, canonical);
        }
        entry
    }
}

/// Trailing "S" removed
#[derive(Debug, Default, Clone)]
pub struct PluralStrip;

impl ResolutionStrategy for PluralStrip {
    fn kind(&self) -> MatchKind {
        MatchKind::PluralStripped
    }

    fn attempt<'a>(&self, token: &str, lexicon: &'a Lexicon) -> Option<&'a SignEntry> {
        token
            .strip_suffix('S')
            .filter(|stem| !stem.is_empty())
            .and_then(|stem| lexicon.signs.get(stem))
    }
}

/// Common suffixes, then common prefixes, removed one at a time
#[derive(Debug, Clone)]
pub struct AffixStrip {
    suffixes: Vec<String>,
    prefixes: Vec<String>,
}

impl AffixStrip {
    pub fn new(rules: &AffixRules) -> Self {
        fn upper(items: &[String]) -> Vec<String> {
            items
                .iter()
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect()
        }
        Self {
            suffixes: upper(&rules.suffixes),
            prefixes: upper(&rules.prefixes),
        }
    }

    /// Stripped forms in the order they are tried
    fn candidates<'t>(&'t self, token: &'t str) -> impl Iterator<Item = &'t str> + 't {
        let without_suffix = self
            .suffixes
            .iter()
            .filter_map(move |suffix| token.strip_suffix(suffix.as_str()));
        let without_prefix = self
            .prefixes
            .iter()
            .filter_map(move |prefix| token.strip_prefix(prefix.as_str()));
        without_suffix.chain(without_prefix).filter(|form| !form.is_empty())
    }
}

impl Default for AffixStrip {
    fn default() -> Self {
        Self::new(&AffixRules::default())
    }
}

impl ResolutionStrategy for AffixStrip {
    fn kind(&self) -> MatchKind {
        MatchKind::SuffixStripped
    }

    fn attempt<'a>(&self, token: &str, lexicon: &'a Lexicon) -> Option<&'a SignEntry> {
        self.candidates(token).find_map(|form| lexicon.signs.get(form))
    }
}

/// Token split on an internal separator, first part with a sign wins
#[derive(Debug, Clone)]
pub struct CompoundSplit {
    separators: Vec<char>,
}

impl CompoundSplit {
    pub fn new(separators: &[char]) -> Self {
        Self {
            separators: separators.to_vec(),
        }
    }

    fn has_internal_separator(&self, token: &str) -> bool {
        let inner = token.trim_matches(|c: char| self.separators.contains(&c));
        inner.contains(|c: char| self.separators.contains(&c))
    }
}

impl Default for CompoundSplit {
    fn default() -> Self {
        Self::new(&AffixRules::default().separators)
    }
}

impl ResolutionStrategy for CompoundSplit {
    fn kind(&self) -> MatchKind {
        MatchKind::Compound
    }

    fn attempt<'a>(&self, token: &str, lexicon: &'a Lexicon) -> Option<&'a SignEntry> {
        if !self.has_internal_separator(token) {
            return None;
        }
        token
            .split(|c: char| self.separators.contains(&c))
            .filter(|part| !part.is_empty())
            .find_map(|part| lexicon.signs.get(part))
    }
}

/// The standard chain: direct, alias, plural, affix, compound
pub fn default_chain(rules: &AffixRules) -> Vec<Box<dyn ResolutionStrategy>> {
    vec![
        Box::new(DirectMatch),
        Box::new(AliasMatch),
        Box::new(PluralStrip),
        Box::new(AffixStrip::new(rules)),
        Box::new(CompoundSplit::new(&rules.separators)),
    ]
}
