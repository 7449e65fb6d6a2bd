//! Built-in word lists, phrases, aliases and affixes.
//!
//! "you" is deliberately absent from the subject set and "help"/"thank" from the
//! verb set: they stay in the trailing bucket in spoken order, which keeps
//! "THANK YOU" adjacent for consolidation. Location nouns ("bathroom", "home")
//! are likewise not objects so they follow question words in encounter order.

use super::{AffixRules, AliasSpec, PhraseSpec, WordClassLists};

const TIME_WORDS: &[&str] = &[
    "today", "tomorrow", "yesterday", "now", "tonight", "morning", "afternoon", "evening",
    "night", "later", "soon", "week", "weekend", "month", "year", "time", "always", "never",
    "sometimes", "before", "after", "then", "recently", "daily",
];

const SUBJECT_WORDS: &[&str] = &["i", "we", "he", "she", "they"];

const VERB_WORDS: &[&str] = &[
    "want", "need", "like", "love", "hate", "go", "come", "see", "look", "watch", "hear",
    "listen", "speak", "talk", "say", "tell", "ask", "answer", "know", "understand", "think",
    "feel", "believe", "hope", "wish", "give", "take", "bring", "get", "make", "play", "eat",
    "drink", "sleep", "wake", "live", "die", "find", "call", "wait", "buy", "learn", "read",
    "write", "sign", "open", "close", "stop", "start", "meet", "visit", "walk", "run", "sit",
    "stand",
];

const OBJECT_WORDS: &[&str] = &[
    "water", "food", "book", "phone", "car", "money", "medicine", "ball", "bag", "key",
    "computer", "coffee", "tea", "milk", "bread", "apple", "ticket", "paper", "pen", "door",
    "window", "shoe", "shirt", "game", "movie", "music", "picture", "letter", "card", "gift",
];

const KEEP_WORDS: &[&str] = &[
    // Pronouns
    "you", "me", "him", "her", "us", "them", "mine", "yours", "hers", "ours", "theirs",
    "myself", "yourself", "himself", "herself", "ourselves", "yourselves", "themselves",
    // Question words
    "what", "where", "when", "why", "how", "who", "which", "whose",
    // Short content words
    "no", "ok", "hi", "up", "yes", "please",
];

const DROP_WORDS: &[&str] = &[
    // Articles and determiners
    "a", "an", "the", "my", "your", "his", "its", "our", "their", "it",
    // Prepositions
    "for", "of", "at", "by", "with", "from", "to", "in", "on",
    // Copulas and helping verbs
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did",
    // Modal verbs
    "will", "shall", "may", "might", "must", "can", "could", "should", "would",
    // Conjunctions
    "and", "but", "or", "nor", "so", "yet",
    // Fillers
    "um", "uh", "ah", "er", "hmm",
];

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

pub(super) fn word_classes() -> WordClassLists {
    WordClassLists {
        time: owned(TIME_WORDS),
        subject: owned(SUBJECT_WORDS),
        verb: owned(VERB_WORDS),
        object: owned(OBJECT_WORDS),
        keep: owned(KEEP_WORDS),
        drop: owned(DROP_WORDS),
        short_word_limit: 2,
    }
}

pub(super) fn phrases() -> Vec<PhraseSpec> {
    [
        ("THANK", "YOU", "THANKYOU"),
        ("GOOD", "BYE", "GOODBYE"),
        ("EXCUSE", "ME", "EXCUSEME"),
    ]
    .iter()
    .map(|(first, second, canonical)| PhraseSpec {
        first: first.to_string(),
        second: second.to_string(),
        canonical: canonical.to_string(),
    })
    .collect()
}

pub(super) fn aliases() -> Vec<AliasSpec> {
    [
        ("THANK", "THANKYOU"),
        ("THANKS", "THANKYOU"),
        ("TOILET", "BATHROOM"),
        ("RESTROOM", "BATHROOM"),
        ("MOM", "MOTHER"),
        ("DAD", "FATHER"),
        ("OKAY", "OK"),
        ("HEY", "HELLO"),
        ("BYE", "GOODBYE"),
        ("PAL", "FRIEND"),
        ("MAD", "ANGRY"),
        ("AFRAID", "SCARED"),
        ("HOUSE", "HOME"),
        ("JOB", "WORK"),
        ("SHOP", "STORE"),
    ]
    .iter()
    .map(|(alias, canonical)| AliasSpec {
        alias: alias.to_string(),
        canonical: canonical.to_string(),
    })
    .collect()
}

pub(super) fn affix_rules() -> AffixRules {
    AffixRules {
        suffixes: owned(&["ING", "ED", "ER", "+"]),
        prefixes: owned(&["RE", "UN", "PRE", "DIS"]),
        separators: vec!['_', '-'],
    }
}
