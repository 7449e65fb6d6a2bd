/*!
 * Tests for vocabulary loading and validation
 */

use crate::common;
use echosign::errors::VocabularyError;
use echosign::vocabulary::{PhraseSpec, Vocabulary};

#[test]
fn test_from_file_withValidVocabulary_shouldLoad() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_vocabulary(dir.path())?;

    let vocabulary = Vocabulary::from_file(&path)?;
    assert_eq!(vocabulary.signs.len(), 3);
    assert_eq!(vocabulary.word_classes.short_word_limit, 2);
    assert_eq!(vocabulary.affixes.prefixes, vec!["RE", "UN", "PRE", "DIS"]);
    Ok(())
}

#[test]
fn test_from_file_withMissingFile_shouldReturnReadError() {
    let result = Vocabulary::from_file(std::path::Path::new("/definitely/not/here.json"));
    assert!(matches!(result, Err(VocabularyError::Read { .. })));
}

#[test]
fn test_from_json_withMalformedJson_shouldReturnParseError() {
    let result = Vocabulary::from_json("{ \"word_classes\": ");
    assert!(matches!(result, Err(VocabularyError::Parse(_))));
}

#[test]
fn test_validate_withEmptyWord_shouldReject() {
    let mut vocabulary = Vocabulary::builtin().clone();
    vocabulary.word_classes.object.push("  ".to_string());

    assert!(matches!(
        vocabulary.validate(),
        Err(VocabularyError::EmptyEntry("object"))
    ));
}

#[test]
fn test_validate_withDropWordInVerbSet_shouldReportConflict() {
    let mut vocabulary = Vocabulary::builtin().clone();
    vocabulary.word_classes.verb.push("Could".to_string());

    match vocabulary.validate() {
        Err(VocabularyError::DropConflict { word, set }) => {
            assert_eq!(word, "Could");
            assert_eq!(set, "verb");
        }
        other => panic!("expected drop conflict, got {:?}", other),
    }
}

#[test]
fn test_validate_withChainedPhrase_shouldReject() {
    let mut vocabulary = Vocabulary::builtin().clone();
    vocabulary.phrases.push(PhraseSpec {
        first: "SEE".to_string(),
        second: "YOU".to_string(),
        canonical: "THANK".to_string(),
    });

    assert!(matches!(
        vocabulary.validate(),
        Err(VocabularyError::ChainedPhrase { .. })
    ));
}

/// Minimal vocabulary JSON with the given verb, object and drop lists
fn word_class_json(verb: &str, object: &str, drop: &str) -> String {
    format!(
        r#"{{
          "word_classes": {{
            "time": [], "subject": [], "verb": [{verb}], "object": [{object}],
            "keep": [], "drop": [{drop}]
          }},
          "signs": [ {{ "word": "THING", "description": "", "category": "Objects" }} ]
        }}"#
    )
}

#[test]
fn test_validate_withInflectedVerbInDropSet_shouldReject() {
    let json = word_class_json(r#""be""#, "", r#""so", "being""#);

    match Vocabulary::from_json(&json) {
        Err(VocabularyError::DropConflict { word, set }) => {
            assert_eq!(word, "being");
            assert_eq!(set, "verb");
        }
        other => panic!("expected drop conflict, got {:?}", other),
    }
}

#[test]
fn test_validate_withPluralObjectInDropSet_shouldReject() {
    let json = word_class_json("", r#""thing""#, r#""the", "Things""#);

    match Vocabulary::from_json(&json) {
        Err(VocabularyError::DropConflict { word, set }) => {
            assert_eq!(word, "Things");
            assert_eq!(set, "object");
        }
        other => panic!("expected drop conflict, got {:?}", other),
    }
}

#[test]
fn test_validate_withUninflectedDropWords_shouldAccept() {
    let json = word_class_json(r#""be""#, r#""thing""#, r#""so", "been", "thin""#);
    assert!(Vocabulary::from_json(&json).is_ok());
}

#[test]
fn test_validate_withPhraseProducingDropWord_shouldReject() {
    let mut vocabulary = Vocabulary::builtin().clone();
    vocabulary.phrases.push(PhraseSpec {
        first: "GOOD".to_string(),
        second: "NIGHT".to_string(),
        canonical: "So".to_string(),
    });

    match vocabulary.validate() {
        Err(VocabularyError::DropConflict { word, set }) => {
            assert_eq!(word, "So");
            assert_eq!(set, "phrase");
        }
        other => panic!("expected drop conflict, got {:?}", other),
    }
}
