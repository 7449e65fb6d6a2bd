/*!
 * Error types for the echosign application.
 *
 * The translation pipeline itself never fails: unknown words fall back to
 * fingerspelling and invalid playback transitions are no-ops. The errors here
 * cover the surfaces around it (vocabulary files, the playback actor and the
 * application shell), using the thiserror crate for ergonomic definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating a vocabulary
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// The vocabulary file could not be read
    #[error("Failed to read vocabulary file {path}: {message}")]
    Read {
        /// Path of the vocabulary file
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },

    /// The vocabulary file is not valid JSON for the expected schema
    #[error("Failed to parse vocabulary: {0}")]
    Parse(String),

    /// A word list or table contains an empty entry
    #[error("Empty entry in {0}")]
    EmptyEntry(&'static str),

    /// A word appears both in the drop set and in a set that keeps it
    #[error("Word '{word}' is in the drop set and in the {set} set")]
    DropConflict {
        /// The conflicting word
        word: String,
        /// Name of the other set
        set: &'static str,
    },

    /// A consolidation rule produces a token that another rule would consume
    #[error("Phrase '{first} {second}' produces '{canonical}', which is itself a phrase word")]
    ChainedPhrase {
        /// First word of the rule
        first: String,
        /// Second word of the rule
        second: String,
        /// Canonical replacement token
        canonical: String,
    },
}

/// Errors that can occur when talking to the playback sequencer
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlaybackError {
    /// The sequencer task has shut down and no longer accepts commands
    #[error("Playback sequencer is closed")]
    Closed,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from vocabulary loading
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// Error from the playback sequencer
    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
