//! Solver error type

use crate::core::WordError;
use thiserror::Error;

/// Errors raised while building a solver context or playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The dictionary has nothing to guess from
    #[error("dictionary contains no {word_length}-letter words")]
    EmptyDictionary { word_length: usize },

    /// A word entering the solver has the wrong length
    #[error("malformed word '{word}': expected {expected} letters")]
    LengthMismatch { word: String, expected: usize },

    /// A word entering the solver is not made of alphabet letters
    #[error("malformed word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    /// Feedback does not cover every letter of the guess
    #[error("feedback has {actual} marks, expected {expected}")]
    FeedbackLength { expected: usize, actual: usize },

    /// Every candidate has been ruled out
    #[error("no consistent candidates remain")]
    NoCandidates,

    /// The game did not finish within the configured number of rounds
    #[error("target not found within {0} rounds")]
    RoundLimit(usize),
}
