//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: &'static str,
    },

    #[error("invalid board state: {message}")]
    InvalidState { message: String },

    #[error("no memoized value for state '{state}' (not reachable from the evaluator root)")]
    NoMemoizedValue { state: String },

    #[error("state '{state}' has no legal moves")]
    NoLegalMoves { state: String },

    #[error("conflicting memo entry for state '{state}': existing {existing}, incoming {incoming}")]
    ConflictingMemoEntry {
        state: String,
        existing: i8,
        incoming: i8,
    },

    #[error("wrong board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
