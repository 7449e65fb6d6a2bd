/*!
 * Tests for text normalization
 */

use echosign::gloss::normalize;

#[test]
fn test_normalize_withPunctuation_shouldStripIt() {
    assert_eq!(
        normalize("Hello, World! How's it going?"),
        vec!["hello", "world", "hows", "it", "going"]
    );
}

#[test]
fn test_normalize_withMixedWhitespace_shouldSplitOnRuns() {
    assert_eq!(normalize("  where\tis\n\nthe   bathroom "), vec!["where", "is", "the", "bathroom"]);
}

#[test]
fn test_normalize_withDigitsAndSymbols_shouldDropEmptyPieces() {
    assert_eq!(normalize("I have 2 cats & 3 dogs"), vec!["i", "have", "cats", "dogs"]);
}

#[test]
fn test_normalize_withEmptyInput_shouldReturnEmptyList() {
    assert!(normalize("").is_empty());
    assert!(normalize("   \t\n").is_empty());
    assert!(normalize("... !!! ???").is_empty());
}

#[test]
fn test_normalize_withAnyInput_shouldNeverReturnEmptyToken() {
    let inputs = [
        "",
        "a",
        "- - -",
        "Thank you for your help",
        "x1y2z3",
        "émigré café",
        "UPPER lower MiXeD",
        "''  \"\" ()",
    ];

    for input in inputs {
        let words = normalize(input);
        assert!(words.iter().all(|w| !w.is_empty()), "{input:?} -> {words:?}");
        assert!(
            words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())),
            "{input:?} -> {words:?}"
        );
    }
}
