//! Error types
//!
//! Lower layers report failures through these enums; only the command drivers
//! decide whether a failure ends the attempt or is recoverable.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),

    #[error("word must contain only ASCII letters")]
    NonAscii,

    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Malformed feedback string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must be exactly 5 symbols, got {0}")]
    InvalidLength(usize),

    #[error("unrecognized feedback symbol '{symbol}' at position {position} (expected _, # or !)")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Failures raised while choosing a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The word list cannot explain the feedback received so far
    #[error("no valid candidates remain for the feedback received")]
    NoCandidates,

    /// Letter statistics were requested over an empty candidate set
    #[error("cannot compute letter statistics over an empty candidate set")]
    EmptyStatistics,

    #[error("the puzzle is already solved")]
    AlreadySolved,

    #[error("feedback was given before any guess was made")]
    NoPendingGuess,

    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    #[error("invalid word: {0}")]
    Word(#[from] WordError),
}

/// Failures while reading a word list file
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {} contains no valid five-letter words", path.display())]
    Empty { path: PathBuf },
}
