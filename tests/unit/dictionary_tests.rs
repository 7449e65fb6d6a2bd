/*!
 * Tests for the sign catalog and alias table
 */

use echosign::dictionary::{AliasTable, Lexicon, SignDictionary, SignEntry};
use echosign::vocabulary::Vocabulary;

#[test]
fn test_builtin_catalog_shouldCoverAllCategories() {
    let lexicon = Lexicon::builtin();
    let categories = lexicon.signs.categories();

    for expected in [
        "Actions", "Emotions", "Family", "Greetings", "Health", "Needs", "Numbers", "People",
        "Places", "Politeness", "Questions", "Responses", "Time",
    ] {
        assert!(categories.iter().any(|c| c == expected), "missing {expected}");
    }

    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);
}

#[test]
fn test_builtin_catalog_shouldUseThankyouAsCanonicalKey() {
    let lexicon = Lexicon::builtin();
    let entry = lexicon.signs.get("ThankYou").expect("THANKYOU sign");
    assert_eq!(entry.category, "Politeness");
    assert_eq!(entry.display_key, "asl_thankyou");
    assert!(!lexicon.signs.contains("THANK"));
}

#[test]
fn test_iter_shouldYieldCanonicalWordOrder() {
    let lexicon = Lexicon::builtin();
    let words: Vec<&str> = lexicon.signs.iter().map(|e| e.word.as_str()).collect();
    let mut sorted = words.clone();
    sorted.sort();
    assert_eq!(words, sorted);
}

#[test]
fn test_from_entries_withDuplicateWord_shouldKeepLastDefinition() {
    let signs = SignDictionary::from_entries([
        SignEntry::new("hello", "first", "Greetings", ""),
        SignEntry::new("HELLO", "second", "Greetings", ""),
    ]);
    assert_eq!(signs.len(), 1);
    assert_eq!(signs.get("hello").map(|e| e.description.as_str()), Some("second"));
}

#[test]
fn test_alias_table_withMixedCase_shouldMatchCaseInsensitively() {
    let aliases = AliasTable::from_pairs([("Toilet", "bathroom")]);
    assert_eq!(aliases.canonical_for("TOILET"), Some("BATHROOM"));
    assert_eq!(aliases.canonical_for(" toilet "), Some("BATHROOM"));
    assert_eq!(aliases.canonical_for("sink"), None);
}

#[test]
fn test_lexicon_withDanglingAlias_shouldStillBuild() {
    let mut vocabulary = Vocabulary::builtin().clone();
    vocabulary.aliases.push(echosign::vocabulary::AliasSpec {
        alias: "AUTO".to_string(),
        canonical: "VEHICLE".to_string(),
    });

    let lexicon = Lexicon::from_vocabulary(&vocabulary);
    let dangling = lexicon.aliases.dangling_targets(&lexicon.signs);
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].alias, "AUTO");
}

#[test]
fn test_stats_display_shouldListEveryCategory() {
    let stats = Lexicon::builtin().signs.stats();
    let text = stats.to_string();

    assert!(text.starts_with(&format!("Total unique signs: {}", stats.total_signs)));
    for category in stats.per_category.keys() {
        assert!(text.contains(category.as_str()));
    }
}
