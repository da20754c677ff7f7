//! Tic-Tac-Toe rules: board state, transitions, and terminal detection
//!
//! The free functions below form the function-call API of the game engine.
//! Each one is a thin wrapper over the matching [`Board`] method.

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Cell, Move, Outcome, PieceCount, Player};
pub use game::{Game, GameOutcome};
pub use lines::{LineAnalyzer, WINNING_LINES};

/// The empty starting board
pub fn initial_state() -> Board {
    Board::new()
}

/// Player to move: X when the piece counts are equal, otherwise O
pub fn current_player(board: &Board) -> Player {
    board.current_player()
}

/// Empty cells in row-major order; empty once the game is over
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board.legal_moves()
}

/// Board after the current player fills `mv`
///
/// # Errors
///
/// Returns [`Error::InvalidMove`](crate::Error::InvalidMove) when `mv` is
/// not among [`legal_moves`].
pub fn apply_move(board: &Board, mv: Move) -> crate::Result<Board> {
    board.apply_move(mv)
}

pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// +1 if X has won, -1 if O has won, 0 otherwise
pub fn utility(board: &Board) -> i32 {
    board.utility()
}

pub fn outcome(board: &Board) -> Outcome {
    board.outcome()
}
