/*!
 * English-to-sign translation.
 *
 * `SignTranslator` runs the whole synchronous pipeline for one utterance:
 * gloss conversion followed by per-token sign resolution.
 */

use std::path::Path;

use log::{debug, info};
use serde::Serialize;

use crate::errors::VocabularyError;
use crate::gloss::{GlossConverter, GlossSequence};
use crate::resolver::{MatchKind, ResolvedToken, SignResolver};
use crate::vocabulary::Vocabulary;

/// Word counts before and after conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionStats {
    pub source_words: usize,
    pub gloss_words: usize,

    /// Share of source words removed, in percent
    pub reduction_percent: f64,
}

impl ConversionStats {
    pub fn new(source_words: usize, gloss_words: usize) -> Self {
        let reduction_percent = if source_words == 0 {
            0.0
        } else {
            (1.0 - gloss_words as f64 / source_words as f64) * 100.0
        };

        Self {
            source_words,
            gloss_words,
            reduction_percent,
        }
    }
}

/// Everything produced for one utterance
#[derive(Debug, Clone, Serialize)]
pub struct Translation {
    pub source: String,
    pub normalized: Vec<String>,
    pub gloss: GlossSequence,
    pub resolved: Vec<ResolvedToken>,
    pub stats: ConversionStats,
}

impl Translation {
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Tokens that have to be fingerspelled
    pub fn fallbacks(&self) -> impl Iterator<Item = &ResolvedToken> {
        self.resolved.iter().filter(|r| r.is_fallback())
    }

    pub fn count_by_kind(&self, kind: MatchKind) -> usize {
        self.resolved.iter().filter(|r| r.match_kind == kind).count()
    }
}

/// Gloss converter and resolver sharing one vocabulary
#[derive(Debug, Clone, Default)]
pub struct SignTranslator {
    converter: GlossConverter,
    resolver: SignResolver,
}

impl SignTranslator {
    pub fn new(converter: GlossConverter, resolver: SignResolver) -> Self {
        Self {
            converter,
            resolver,
        }
    }

    /// Translator backed by the built-in vocabulary
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Self {
        Self::new(
            GlossConverter::from_vocabulary(vocabulary),
            SignResolver::from_vocabulary(vocabulary),
        )
    }

    /// Load a vocabulary file; it is validated on load
    pub fn from_vocabulary_file(path: &Path) -> Result<Self, VocabularyError> {
        let vocabulary = Vocabulary::from_file(path)?;
        info!(
            "Loaded vocabulary from {} ({} signs, {} aliases, {} phrases)",
            path.display(),
            vocabulary.signs.len(),
            vocabulary.aliases.len(),
            vocabulary.phrases.len()
        );
        Ok(Self::from_vocabulary(&vocabulary))
    }

    /// Enable or disable memoized resolution
    pub fn with_resolution_cache(mut self, enabled: bool) -> Self {
        self.resolver = self.resolver.with_cache(enabled);
        self
    }

    pub fn converter(&self) -> &GlossConverter {
        &self.converter
    }

    pub fn resolver(&self) -> &SignResolver {
        &self.resolver
    }

    /// Translate one utterance
    pub fn translate(&self, text: &str) -> Translation {
        let conversion = self.converter.convert(text);
        let resolved = self.resolver.resolve_all(&conversion.gloss);
        let stats = ConversionStats::new(conversion.normalized.len(), conversion.gloss.len());

        debug!(
            "Translated {} words into {} signs ({:.0}% reduction)",
            stats.source_words, stats.gloss_words, stats.reduction_percent
        );

        Translation {
            source: text.to_string(),
            normalized: conversion.normalized,
            gloss: conversion.gloss,
            resolved,
            stats,
        }
    }
}
