//! Reassembly of classified words into gloss order.

use std::collections::HashSet;

use super::{GlossSequence, WordClass};

/// Bucket order of the gloss template
const TEMPLATE: [WordClass; 5] = [
    WordClass::Time,
    WordClass::Subject,
    WordClass::Object,
    WordClass::Verb,
    WordClass::Other,
];

/// Arrange classified words as TIME, SUBJECT, OBJECT, VERB, OTHER
///
/// Dropped words are discarded, encounter order is kept inside each bucket, and
/// only the first occurrence of each (uppercased) token survives.
pub fn reorder(classified: &[(String, WordClass)]) -> GlossSequence {
    let mut seen = HashSet::new();
    let mut tokens = Vec::with_capacity(classified.len());

    for bucket in TEMPLATE {
        for (word, _) in classified.iter().filter(|(_, class)| *class == bucket) {
            let token = word.trim().to_uppercase();
            if !token.is_empty() && seen.insert(token.clone()) {
                tokens.push(token);
            }
        }
    }

    GlossSequence::from_tokens(tokens)
}
