//! Minimax search for optimal play
//!
//! The free functions use a default [`Searcher`] (row-major move order).
//! When several moves share the optimal value the first one tried wins, so
//! row-major order makes the choice deterministic; use a [`Searcher`] built
//! with [`MoveOrder::Shuffled`] to vary it.

pub mod minimax;
pub mod order;

pub use minimax::{SearchResult, SearchStats, Searcher};
pub use order::{MoveOrder, SearchConfig};

use crate::tictactoe::{Board, Move};

/// Optimal move for the player to move; `None` iff the board is terminal
pub fn best_move(board: &Board) -> Option<Move> {
    Searcher::default().best_move(board)
}

/// X's best achievable utility from `board` and a move achieving it
pub fn max_value(board: &Board) -> SearchResult {
    Searcher::default().max_value(board)
}

/// O's best achievable utility from `board` and a move achieving it
pub fn min_value(board: &Board) -> SearchResult {
    Searcher::default().min_value(board)
}

pub fn evaluate_moves(board: &Board) -> Vec<(Move, i32)> {
    Searcher::default().evaluate_moves(board)
}

pub fn optimal_moves(board: &Board) -> Vec<Move> {
    Searcher::default().optimal_moves(board)
}

pub fn principal_variation(board: &Board) -> Vec<Move> {
    Searcher::default().principal_variation(board)
}
