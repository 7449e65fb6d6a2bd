/*!
 * Memo cache for sign resolution.
 *
 * Resolution is a pure function of the token and the read-only lexicon, so a
 * result can be reused for as long as the resolver that produced it lives.
 *
 * Only matched tokens are kept, and the entry count is capped, so a stream of
 * unknown words cannot grow the cache without bound.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use super::{MatchKind, ResolvedToken};

/// Entry cap used by `ResolutionCache::new`
pub const DEFAULT_CAPACITY: usize = 4096;

/// Cache of resolved tokens keyed by uppercase token
pub struct ResolutionCache {
    entries: Arc<RwLock<HashMap<String, ResolvedToken>>>,

    capacity: usize,

    hits: Arc<RwLock<usize>>,

    misses: Arc<RwLock<usize>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            capacity,
            hits: Arc::new(RwLock::new(0)),
            misses: Arc::new(RwLock::new(0)),
        }
    }

    /// Look up a previous result, counting the hit or miss
    pub fn get(&self, token: &str) -> Option<ResolvedToken> {
        let entries = self.entries.read();

        match entries.get(token) {
            Some(resolved) => {
                *self.hits.write() += 1;
                debug!("Resolution cache hit for '{}'", token);
                Some(resolved.clone())
            }
            None => {
                *self.misses.write() += 1;
                None
            }
        }
    }

    /// Remember a matched result; unresolved tokens and new keys past the
    /// capacity are not stored
    pub fn store(&self, resolved: &ResolvedToken) {
        if resolved.match_kind == MatchKind::None {
            return;
        }

        let mut entries = self.entries.write();
        if entries.len() >= self.capacity && !entries.contains_key(&resolved.token) {
            debug!("Resolution cache full, not storing '{}'", resolved.token);
            return;
        }
        entries.insert(resolved.token.clone(), resolved.clone());
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }

    pub fn clear(&self) {
        self.entries.write().clear();
        *self.hits.write() = 0;
        *self.misses.write() = 0;

        debug!("Resolution cache cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ResolutionCache {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            capacity: self.capacity,
            hits: self.hits.clone(),
            misses: self.misses.clone(),
        }
    }
}

impl std::fmt::Debug for ResolutionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (hits, misses, _) = self.stats();
        f.debug_struct("ResolutionCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("hits", &hits)
            .field("misses", &misses)
            .finish()
    }
}
