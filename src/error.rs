//! Error types for the crate

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {position} is out of bounds or already occupied")]
    IllegalMove { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("no move available: the position is already won or full")]
    NoMoveAvailable,

    #[error("board text must have exactly {expected} cells, got {got}")]
    BoardLength { expected: usize, got: usize },

    #[error("invalid cell character '{character}' at position {position}")]
    BadCellChar { character: char, position: usize },

    #[error("invalid mark '{found}' (expected 'X' or 'O')")]
    BadMark { found: String },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must differ by at most 1)")]
    InconsistentCounts { x_count: usize, o_count: usize },

    #[error(
        "declared side to move '{declared}' conflicts with piece counts (X={x_count}, O={o_count})"
    )]
    TurnMismatch {
        declared: char,
        x_count: usize,
        o_count: usize,
    },

    #[error("invalid opponent '{input}'. Expected one of: optimal, random")]
    BadOpponent { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
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
