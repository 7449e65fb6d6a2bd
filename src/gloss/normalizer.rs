//! Text normalization ahead of gloss classification.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not an ASCII lowercase letter
static NON_ALPHABETIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z]+").unwrap());

/// Lower-case `text`, split it on whitespace and strip every non-alphabetic
/// character from each piece. Pieces left empty are dropped.
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|piece| NON_ALPHABETIC.replace_all(piece, "").into_owned())
        .filter(|word| !word.is_empty())
        .collect()
}
