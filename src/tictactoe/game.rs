//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Move, Outcome, Player};

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Convert a board outcome, returning `None` while the game is still running
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Ongoing => None,
            Outcome::XWins => Some(GameOutcome::Win(Player::X)),
            Outcome::OWins => Some(GameOutcome::Win(Player::O)),
            Outcome::Draw => Some(GameOutcome::Draw),
        }
    }
}

/// A complete game with history.
///
/// The record moves through `InProgress -> {XWon, OWon, Draw}`; once an
/// outcome is set it never changes and further moves are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Replay a move list into a game record
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`Game::play`].
    pub fn from_moves(moves: &[Move]) -> Result<Self, crate::Error> {
        let mut game = Game::new();
        for &mv in moves {
            game.play(mv)?;
        }
        Ok(game)
    }

    /// Play a move for whichever player is to move
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`](crate::Error::GameOver) once the game is
    /// decided, or [`Error::InvalidMove`](crate::Error::InvalidMove) for an
    /// illegal coordinate.
    pub fn play(&mut self, mv: Move) -> Result<Board, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let next = self.current_state()?.apply_move(mv)?;
        self.moves.push(mv);
        self.outcome = GameOutcome::from_outcome(next.outcome());
        Ok(next)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Replay moves up to a given index (exclusive)
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        self.moves
            .iter()
            .take(end_index)
            .try_fold(Board::new(), |board, &mv| board.apply_move(mv))
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid, which indicates
    /// a hand-edited or corrupted record.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of boards from the empty board to the current one
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid.
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = Board::new();
        states.push(board);
        for &mv in &self.moves {
            board = board.apply_move(mv)?;
            states.push(board);
        }
        Ok(states)
    }
}
