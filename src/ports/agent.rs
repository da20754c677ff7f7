//! Agent port - abstraction over move selection
//!
//! Anything that can pick a move for a board implements [`Agent`], so
//! matches can be run between the minimax solver and baselines alike.

use crate::{
    Result,
    tictactoe::{Board, Move},
};

/// Agent trait - unified interface for move selection
///
/// # Examples
///
/// ```
/// use tictactoe_solver::{
///     pipeline::MinimaxAgent,
///     ports::Agent,
///     tictactoe::Board,
/// };
///
/// let mut agent = MinimaxAgent::new("Minimax".to_string());
/// let mv = agent.select_move(&Board::new()).unwrap();
/// assert!(Board::new().is_legal(mv));
/// ```
pub trait Agent {
    /// Select a move for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) if the
    /// board is terminal.
    fn select_move(&mut self, board: &Board) -> Result<Move>;

    /// Name used in match reports and logs.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Deterministic agents can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
