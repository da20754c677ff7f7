//! Error types for the tic-tac-toe solver

use std::fmt;

use thiserror::Error;

/// Why a move was rejected by [`Board::apply_move`](crate::tictactoe::Board::apply_move)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// Row or column outside `0..=2`
    OutOfBounds,
    /// The cell already holds a piece
    Occupied,
    /// The board is already won or drawn
    GameOver,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::OutOfBounds => "coordinate is out of bounds (must be 0-2)",
            InvalidMoveReason::Occupied => "cell is already occupied",
            InvalidMoveReason::GameOver => "the game is already over",
        };
        f.write_str(text)
    }
}

/// Main error type for the solver crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: InvalidMoveReason,
    },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("board '{context}' cannot arise from legal play")]
    UnreachableBoard { context: String },

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
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
