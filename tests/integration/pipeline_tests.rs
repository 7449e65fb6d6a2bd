/*!
 * End-to-end tests from English text to resolved signs
 */

use crate::common;
use echosign::render::{RenderInstruction, RenderOptions};
use echosign::resolver::MatchKind;
use echosign::SignTranslator;

fn gloss_tokens(translator: &SignTranslator, text: &str) -> Vec<String> {
    translator.translate(text).gloss.into_tokens()
}

#[test]
fn test_translate_withThankYouSentence_shouldMergePhrase() {
    let translation = SignTranslator::builtin().translate("Thank you for your help");

    assert_eq!(translation.normalized, vec!["thank", "you", "for", "your", "help"]);
    assert_eq!(translation.gloss.tokens(), &["THANKYOU", "HELP"]);
    assert!(translation.resolved.iter().all(|r| r.match_kind == MatchKind::Direct));
}

#[test]
fn test_translate_withBathroomQuestion_shouldDropGrammarWords() {
    let translation = SignTranslator::builtin().translate("Where is the bathroom?");

    assert_eq!(translation.gloss.tokens(), &["WHERE", "BATHROOM"]);
    assert_eq!(
        translation.resolved[1].sign.as_ref().map(|s| s.category.as_str()),
        Some("Needs")
    );
}

#[test]
fn test_translate_withUnknownWord_shouldFallBackToFingerspelling() {
    let translation = SignTranslator::builtin().translate("xyzzy");

    assert_eq!(translation.gloss.tokens(), &["XYZZY"]);
    assert_eq!(translation.fallbacks().count(), 1);

    let instruction = RenderOptions::default().instruction_for(&translation.resolved[0]);
    assert!(instruction.is_fingerspelled());
    match instruction {
        RenderInstruction::Fingerspell { letters, .. } => {
            assert_eq!(letters, vec!['X', 'Y', 'Z', 'Z', 'Y']);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_translate_withOnlyPunctuation_shouldProduceNothing() {
    let translation = SignTranslator::builtin().translate("... ?!");
    assert!(translation.is_empty());
    assert!(translation.gloss.is_empty());
}

#[test]
fn test_translate_withRepeatedWords_shouldKeepFirstOccurrence() {
    let tokens = gloss_tokens(&SignTranslator::builtin(), "help help HELP");
    assert_eq!(tokens, vec!["HELP"]);
}

#[test]
fn test_translate_withMergedPhraseAlreadySpoken_shouldKeepSingleToken() {
    let translator = SignTranslator::builtin();
    assert_eq!(gloss_tokens(&translator, "thankyou thank you"), vec!["THANKYOU"]);
    assert_eq!(gloss_tokens(&translator, "thank you thankyou help"), vec!["THANKYOU", "HELP"]);
}

#[test]
fn test_translate_withCustomVocabulary_shouldUseItsTables() -> anyhow::Result<()> {
    common::init_logging();
    let dir = common::create_temp_dir()?;
    let path = common::create_test_vocabulary(dir.path())?;
    let translator = SignTranslator::from_vocabulary_file(&path)?;

    let translation = translator.translate("I want some chai today");
    assert_eq!(translation.gloss.tokens(), &["TODAY", "I", "WANT", "CHAI"]);

    let kinds: Vec<MatchKind> = translation.resolved.iter().map(|r| r.match_kind).collect();
    assert_eq!(
        kinds,
        vec![MatchKind::None, MatchKind::None, MatchKind::Direct, MatchKind::Alias]
    );
    assert_eq!(translation.resolved[3].sign.as_ref().map(|s| s.word.as_str()), Some("TEA"));

    let greeting = translator.translate("Good morning!");
    assert_eq!(greeting.gloss.tokens(), &["GOODMORNING"]);
    assert_eq!(greeting.resolved[0].display_key(), Some("gm"));
    Ok(())
}

#[test]
fn test_from_vocabulary_file_withMissingFile_shouldFail() {
    let result = SignTranslator::from_vocabulary_file(std::path::Path::new("/no/such/file.json"));
    assert!(result.is_err());
}

#[test]
fn test_translation_json_shouldExposeMatchKinds() -> anyhow::Result<()> {
    let translation = SignTranslator::builtin().translate("bathrooms xyzzy");
    let json = serde_json::to_value(&translation)?;

    assert_eq!(json["gloss"], serde_json::json!(["BATHROOMS", "XYZZY"]));
    assert_eq!(json["resolved"][0]["match_kind"], "PLURAL_STRIPPED");
    assert_eq!(json["resolved"][0]["sign"]["word"], "BATHROOM");
    assert_eq!(json["resolved"][1]["match_kind"], "NONE");
    assert!(json["resolved"][1]["sign"].is_null());
    Ok(())
}

#[test]
fn test_translate_withCacheEnabled_shouldGiveSameResult() {
    let plain = SignTranslator::builtin();
    let cached = SignTranslator::builtin().with_resolution_cache(true);

    for text in ["Where is the bathroom", "I need water please", "xyzzy plugh"] {
        assert_eq!(plain.translate(text).resolved, cached.translate(text).resolved);
        assert_eq!(plain.translate(text).resolved, cached.translate(text).resolved);
    }
}
