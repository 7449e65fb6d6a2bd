/*!
 * Tests for sign resolution and its fallback chain
 */

use std::sync::Arc;

use echosign::dictionary::{AliasTable, Lexicon, SignDictionary, SignEntry};
use echosign::resolver::{
    AliasMatch, CompoundSplit, DirectMatch, MatchKind, ResolutionCache, ResolvedToken,
    SignResolver,
};

fn sign_word(resolved: &ResolvedToken) -> Option<&str> {
    resolved.sign.as_ref().map(|s| s.word.as_str())
}

/// Catalog where several fallback steps could apply to the same token
fn overlapping_lexicon() -> Arc<Lexicon> {
    Arc::new(Lexicon {
        signs: SignDictionary::from_entries([
            SignEntry::new("CAT", "", "Animals", ""),
            SignEntry::new("CATS", "", "Animals", ""),
            SignEntry::new("PLAY", "", "Actions", ""),
            SignEntry::new("KITTEN", "", "Animals", ""),
            SignEntry::new("DOG", "", "Animals", ""),
        ]),
        aliases: AliasTable::from_pairs([("KITTY", "KITTEN"), ("DOGS", "CAT"), ("PUP", "PUPPY")]),
    })
}

#[test]
fn test_resolve_withBathrooms_shouldStripPlural() {
    let resolved = SignResolver::default().resolve("BATHROOMS");
    assert_eq!(resolved.match_kind, MatchKind::PluralStripped);
    assert_eq!(sign_word(&resolved), Some("BATHROOM"));
    assert_eq!(resolved.token, "BATHROOMS");
}

#[test]
fn test_resolve_withXyzzy_shouldReturnNone() {
    let resolved = SignResolver::default().resolve("XYZZY");
    assert_eq!(resolved.match_kind, MatchKind::None);
    assert_eq!(resolved.sign, None);
    assert!(resolved.is_fallback());
}

#[test]
fn test_resolve_withEveryCatalogWord_shouldMatchDirectly() {
    let resolver = SignResolver::default();
    for entry in resolver.lexicon().signs.iter() {
        let resolved = resolver.resolve(&entry.word);
        assert_eq!(resolved.match_kind, MatchKind::Direct, "{}", entry.word);
        assert_eq!(resolved.sign.as_ref(), Some(entry));
    }
}

#[test]
fn test_resolve_withBuiltinAliases_shouldUseAliasTarget() {
    let resolver = SignResolver::default();
    for (alias, target) in [("TOILET", "BATHROOM"), ("mom", "MOTHER"), ("Thank", "THANKYOU")] {
        let resolved = resolver.resolve(alias);
        assert_eq!(resolved.match_kind, MatchKind::Alias, "{alias}");
        assert_eq!(sign_word(&resolved), Some(target));
    }
}

#[test]
fn test_resolve_withSuffixesAndPrefixes_shouldStripThem() {
    let resolver = SignResolver::default();
    for (token, target) in [
        ("SLEEPING", "SLEEP"),
        ("WANTED", "WANT"),
        ("HELPER", "HELP"),
        ("SAD+", "SAD"),
        ("REPLAY", "PLAY"),
        ("UNKNOW", "KNOW"),
        ("DISLIKE", "LIKE"),
    ] {
        let resolved = resolver.resolve(token);
        if resolver.lexicon().signs.contains(target) {
            assert_eq!(resolved.match_kind, MatchKind::SuffixStripped, "{token}");
            assert_eq!(sign_word(&resolved), Some(target));
        } else {
            assert_ne!(resolved.match_kind, MatchKind::Direct, "{token}");
        }
    }
}

#[test]
fn test_resolve_withCompoundToken_shouldUseFirstKnownPart() {
    let resolver = SignResolver::default();

    let resolved = resolver.resolve("ZORP_WATER_FOOD");
    assert_eq!(resolved.match_kind, MatchKind::Compound);
    assert_eq!(sign_word(&resolved), Some("WATER"));

    let unknown = resolver.resolve("ZORP-BLIX");
    assert_eq!(unknown.match_kind, MatchKind::None);
}

#[test]
fn test_resolve_withOverlappingSteps_shouldFollowChainOrder() {
    let resolver = SignResolver::new(overlapping_lexicon(), &Default::default());

    // direct beats plural stripping
    assert_eq!(resolver.resolve("CATS").match_kind, MatchKind::Direct);
    // alias beats plural stripping
    let dogs = resolver.resolve("DOGS");
    assert_eq!(dogs.match_kind, MatchKind::Alias);
    assert_eq!(sign_word(&dogs), Some("CAT"));
    // plural beats suffix stripping
    assert_eq!(resolver.resolve("KITTENS").match_kind, MatchKind::PluralStripped);
    assert_eq!(resolver.resolve("KITTY").match_kind, MatchKind::Alias);
}

#[test]
fn test_resolve_withAliasToMissingSign_shouldFallThrough() {
    let resolver = SignResolver::new(overlapping_lexicon(), &Default::default());
    let resolved = resolver.resolve("PUP");
    assert_eq!(resolved.match_kind, MatchKind::None);
}

#[test]
fn test_with_strategies_withoutAlias_shouldSkipAliasStep() {
    let resolver = SignResolver::with_strategies(
        overlapping_lexicon(),
        vec![Box::new(DirectMatch), Box::new(CompoundSplit::default())],
    );
    assert_eq!(resolver.resolve("KITTY").match_kind, MatchKind::None);
    assert_eq!(resolver.resolve("CAT-DOG").match_kind, MatchKind::Compound);

    let with_alias = SignResolver::with_strategies(
        overlapping_lexicon(),
        vec![Box::new(DirectMatch), Box::new(AliasMatch)],
    );
    assert_eq!(with_alias.resolve("KITTY").match_kind, MatchKind::Alias);
}

#[test]
fn test_resolve_all_shouldKeepGlossOrder() {
    let resolver = SignResolver::default();
    let gloss = echosign::GlossSequence::from_tokens(vec![
        "where".to_string(),
        "toilets".to_string(),
        "zzz".to_string(),
    ]);

    let kinds: Vec<MatchKind> = resolver.resolve_all(&gloss).iter().map(|r| r.match_kind).collect();
    assert_eq!(kinds, vec![MatchKind::Direct, MatchKind::None, MatchKind::None]);
}

#[test]
fn test_cache_withRepeatedLookups_shouldCountHits() {
    let resolver = SignResolver::default().with_cache(true);
    for _ in 0..3 {
        resolver.resolve("water");
    }
    resolver.resolve("xyzzy");

    let cache = resolver.cache().expect("cache enabled");
    let (hits, misses, hit_rate) = cache.stats();
    assert_eq!((hits, misses), (2, 2));
    assert!((hit_rate - 0.5).abs() < f64::EPSILON);
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.stats().0, 0);
}

#[test]
fn test_cache_clone_shouldShareEntries() {
    let cache = ResolutionCache::new();
    let clone = cache.clone();
    let water = SignResolver::default().resolve("water");
    cache.store(&water);
    assert_eq!(clone.get("WATER"), Some(water));
}

#[test]
fn test_cache_withUnresolvedTokens_shouldNotStoreThem() {
    let resolver = SignResolver::default().with_cache(true);
    for word in ["xyzzy", "plugh", "frobozz", "xyzzy"] {
        assert_eq!(resolver.resolve(word).match_kind, MatchKind::None);
    }

    let cache = resolver.cache().expect("cache enabled");
    assert!(cache.is_empty());
    assert_eq!(cache.stats().1, 4);
}

#[test]
fn test_cache_whenFull_shouldKeepExistingEntriesOnly() {
    let resolver = SignResolver::default();
    let cache = ResolutionCache::with_capacity(2);
    let [water, help, food] = ["water", "help", "food"].map(|w| resolver.resolve(w));

    cache.store(&water);
    cache.store(&help);
    cache.store(&food);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.capacity(), 2);
    assert!(cache.get("FOOD").is_none());

    cache.store(&water);
    assert_eq!(cache.get("WATER"), Some(water));
}

#[test]
fn test_resolver_withoutCache_shouldHaveNoCache() {
    assert!(SignResolver::default().cache().is_none());
    assert!(SignResolver::default().with_cache(false).cache().is_none());
}

#[test]
fn test_match_kind_serialization_shouldUseScreamingCase() {
    let json = serde_json::to_string(&MatchKind::PluralStripped).unwrap();
    assert_eq!(json, "\"PLURAL_STRIPPED\"");
}
