/*!
 * Sign resolution with an ordered fallback chain.
 *
 * A gloss token is tried against each `ResolutionStrategy` in turn:
 * direct catalog match, alias, plural stripping, affix stripping and compound
 * splitting. The first strategy to find a catalog entry decides the
 * `MatchKind`. When none does, the token resolves to `MatchKind::None` and is
 * fingerspelled downstream.
 */

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dictionary::{Lexicon, SignEntry};
use crate::gloss::GlossSequence;
use crate::vocabulary::{AffixRules, Vocabulary};

pub mod cache;
pub mod strategies;

pub use cache::ResolutionCache;
pub use strategies::{
    default_chain, AffixStrip, AliasMatch, CompoundSplit, DirectMatch, PluralStrip,
    ResolutionStrategy,
};

/// How a token was matched to a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchKind {
    Direct,
    Alias,
    PluralStripped,
    SuffixStripped,
    Compound,
    None,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MatchKind::Direct => "direct",
            MatchKind::Alias => "alias",
            MatchKind::PluralStripped => "plural stripped",
            MatchKind::SuffixStripped => "suffix stripped",
            MatchKind::Compound => "compound",
            MatchKind::None => "fingerspell",
        };
        f.write_str(label)
    }
}

/// One gloss token and the sign it resolved to, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedToken {
    pub token: String,
    pub sign: Option<SignEntry>,
    pub match_kind: MatchKind,
}

impl ResolvedToken {
    pub fn matched(token: &str, sign: &SignEntry, match_kind: MatchKind) -> Self {
        Self {
            token: token.to_string(),
            sign: Some(sign.clone()),
            match_kind,
        }
    }

    pub fn unresolved(token: &str) -> Self {
        Self {
            token: token.to_string(),
            sign: None,
            match_kind: MatchKind::None,
        }
    }

    /// True when the token has to be fingerspelled
    pub fn is_fallback(&self) -> bool {
        self.match_kind == MatchKind::None
    }

    pub fn description(&self) -> Option<&str> {
        self.sign.as_ref().map(|s| s.description.as_str())
    }

    pub fn category(&self) -> Option<&str> {
        self.sign.as_ref().map(|s| s.category.as_str())
    }

    pub fn display_key(&self) -> Option<&str> {
        self.sign.as_ref().map(|s| s.display_key.as_str())
    }
}

/// Resolves gloss tokens against a read-only lexicon
#[derive(Debug, Clone)]
pub struct SignResolver {
    lexicon: Arc<Lexicon>,
    strategies: Arc<Vec<Box<dyn ResolutionStrategy>>>,
    cache: Option<ResolutionCache>,
}

impl Default for SignResolver {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), &AffixRules::default())
    }
}

impl SignResolver {
    /// Resolver using the standard fallback chain
    pub fn new(lexicon: Arc<Lexicon>, affixes: &AffixRules) -> Self {
        Self::with_strategies(lexicon, default_chain(affixes))
    }

    /// Resolver with a custom chain, tried in the given order
    pub fn with_strategies(lexicon: Arc<Lexicon>, strategies: Vec<Box<dyn ResolutionStrategy>>) -> Self {
        Self {
            lexicon,
            strategies: Arc::new(strategies),
            cache: None,
        }
    }

    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self::new(
            Arc::new(Lexicon::from_vocabulary(vocabulary)),
            &vocabulary.affixes,
        )
    }

    /// Memoize results; safe because the lexicon never changes
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled.then(ResolutionCache::new);
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn cache(&self) -> Option<&ResolutionCache> {
        self.cache.as_ref()
    }

    /// Resolve one token
    ///
    /// Never fails: a token no strategy can match comes back with
    /// `MatchKind::None` and no sign.
    pub fn resolve(&self, token: &str) -> ResolvedToken {
        let token = token.trim().to_uppercase();

        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get(&token)) {
            return cached;
        }

        let resolved = self.run_chain(&token);

        if let Some(cache) = &self.cache {
            cache.store(&resolved);
        }

        resolved
    }

    /// Resolve every token of a gloss, keeping its order
    pub fn resolve_all(&self, gloss: &GlossSequence) -> Vec<ResolvedToken> {
        gloss.iter().map(|token| self.resolve(token)).collect()
    }

    fn run_chain(&self, token: &str) -> ResolvedToken {
        if token.is_empty() {
            return ResolvedToken::unresolved(token);
        }

        for strategy in self.strategies.iter() {
            if let Some(entry) = strategy.attempt(token, &self.lexicon) {
                debug!("Resolved '{}' to '{}' ({})", token, entry.word, strategy.kind());
                return ResolvedToken::matched(token, entry, strategy.kind());
            }
        }

        debug!("No sign for '{}', falling back to fingerspelling", token);
        ResolvedToken::unresolved(token)
    }
}
