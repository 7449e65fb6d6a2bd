//! Merging of known adjacent word pairs into single gloss tokens.

use std::collections::HashSet;

use log::debug;

use super::GlossSequence;
use crate::vocabulary::PhraseSpec;

/// One consolidation rule, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseRule {
    pub first: String,
    pub second: String,
    pub canonical: String,
}

impl PhraseRule {
    pub fn new(first: &str, second: &str, canonical: &str) -> Self {
        Self {
            first: first.trim().to_uppercase(),
            second: second.trim().to_uppercase(),
            canonical: canonical.trim().to_uppercase(),
        }
    }

    fn matches(&self, first: &str, second: &str) -> bool {
        self.first.eq_ignore_ascii_case(first) && self.second.eq_ignore_ascii_case(second)
    }
}

/// Ordered list of two-word rules; earlier rules win at a given position
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    rules: Vec<PhraseRule>,
}

impl PhraseTable {
    pub fn new(rules: Vec<PhraseRule>) -> Self {
        Self { rules }
    }

    pub fn from_specs(specs: &[PhraseSpec]) -> Self {
        Self::new(
            specs
                .iter()
                .map(|s| PhraseRule::new(&s.first, &s.second, &s.canonical))
                .collect(),
        )
    }

    pub fn rules(&self) -> &[PhraseRule] {
        &self.rules
    }

    /// Replace matching adjacent pairs, scanning greedily left to right
    ///
    /// Within a pass a merged pair is never reconsidered, so matches do not
    /// overlap. A token equal to one already emitted is skipped, keeping the
    /// first occurrence. Skipping can bring a new pair together, so passes
    /// repeat until one changes nothing. The input is left untouched.
    pub fn consolidate(&self, sequence: &GlossSequence) -> GlossSequence {
        let mut current = self.merge_pass(sequence.tokens());
        loop {
            let next = self.merge_pass(&current);
            // every merge or skip shortens the sequence
            if next.len() == current.len() {
                return GlossSequence::from_tokens(next);
            }
            current = next;
        }
    }

    fn merge_pass(&self, tokens: &[String]) -> Vec<String> {
        let mut merged = Vec::with_capacity(tokens.len());
        let mut seen = HashSet::new();
        let mut i = 0;

        while i < tokens.len() {
            let rule = tokens
                .get(i + 1)
                .and_then(|next| self.rules.iter().find(|rule| rule.matches(&tokens[i], next)));

            let token = match rule {
                Some(rule) => {
                    debug!("Consolidated '{} {}' into '{}'", tokens[i], tokens[i + 1], rule.canonical);
                    i += 2;
                    rule.canonical.clone()
                }
                None => {
                    i += 1;
                    tokens[i - 1].clone()
                }
            };

            if seen.insert(token.clone()) {
                merged.push(token);
            } else {
                debug!("Dropped repeated '{}' after consolidation", token);
            }
        }

        merged
    }
}
