//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or differ by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid player '{player}' in '{label}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String, label: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("coordinate ({row}, {col}) is out of bounds (each must be 0-2)")]
    InvalidCoordinate { row: usize, col: usize },

    #[error("invalid search precondition: {reason}")]
    SearchPrecondition { reason: String },

    #[error("invalid move in game history at index {index}: {source}")]
    CorruptHistory {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
