/*!
 * # echosign - speech to sign language
 *
 * A Rust library that turns recognized English speech into a timed sequence
 * of sign language tokens.
 *
 * ## Features
 *
 * - Rule-based English to gloss conversion:
 *   - normalization and word classification against static word sets
 *   - TIME, SUBJECT, OBJECT, VERB, OTHER reordering with de-duplication
 *   - consolidation of two-word phrases ("THANK YOU" into "THANKYOU")
 * - Sign lookup with a fallback chain (direct, alias, plural, affix, compound)
 *   ending in fingerspelling
 * - Timed playback with start, stop and reset, driven by a tokio task
 * - Replaceable vocabulary loaded from JSON
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `vocabulary`: Word sets, phrase table, aliases and sign catalog data
 * - `gloss`: English to gloss conversion:
 *   - `gloss::normalizer`: Tokenization
 *   - `gloss::classifier`: Word classes
 *   - `gloss::reorderer`: Gloss word order
 *   - `gloss::consolidation`: Phrase merging
 * - `dictionary`: Sign catalog and alias table
 * - `resolver`: Sign resolution strategies and memo cache
 * - `playback`: Playback state machine and sequencer actor
 * - `translator`: Pipeline facade
 * - `render`: Sign or fingerspelling output
 * - `speech`: Sources of recognized utterances
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod dictionary;
pub mod errors;
pub mod gloss;
pub mod playback;
pub mod render;
pub mod resolver;
pub mod speech;
pub mod translator;
pub mod vocabulary;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use dictionary::{AliasTable, Lexicon, SignDictionary, SignEntry};
pub use errors::{AppError, PlaybackError, VocabularyError};
pub use gloss::{GlossConverter, GlossSequence, WordClass};
pub use playback::{PlaybackMachine, PlaybackSequencer, PlaybackState, StartOutcome, StopAck};
pub use resolver::{MatchKind, ResolvedToken, SignResolver};
pub use translator::{SignTranslator, Translation};
pub use vocabulary::Vocabulary;
