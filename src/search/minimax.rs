//! Exhaustive minimax over the full game tree
//!
//! X maximizes utility and O minimizes it. Every reachable child is
//! explored; there is no pruning and no caching of positions.

use log::debug;
use rand::{SeedableRng, random, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};

use super::order::{MoveOrder, SearchConfig};
use crate::tictactoe::{Board, LineAnalyzer, Move, Player};

/// Backed-up value of a node together with the move that achieves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub value: i32,
    /// `None` on terminal boards
    pub best_move: Option<Move>,
}

/// Work done by the most recent search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, the root included
    pub nodes: u64,
    /// Terminal boards reached
    pub leaves: u64,
}

/// Minimax search with a configurable move order
pub struct Searcher {
    order: MoveOrder,
    rng: StdRng,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let seed = config.seed.unwrap_or_else(random);
        Self {
            order: config.move_order,
            rng: StdRng::seed_from_u64(seed),
            stats: SearchStats::default(),
        }
    }

    pub fn move_order(&self) -> MoveOrder {
        self.order
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Optimal move for the player to move, or `None` if the game is over
    pub fn best_move(&mut self, board: &Board) -> Option<Move> {
        if board.is_terminal() {
            return None;
        }

        self.stats = SearchStats::default();
        let player = board.current_player();
        let result = match player {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        };
        debug!(
            "{player} to move on {}: value {} via {:?} ({} nodes, {} leaves)",
            board.encode(),
            result.value,
            result.best_move,
            self.stats.nodes,
            self.stats.leaves
        );
        result.best_move
    }

    /// Value of the board under optimal play by both sides
    pub fn value(&mut self, board: &Board) -> i32 {
        match board.current_player() {
            Player::X => self.max_value(board).value,
            Player::O => self.min_value(board).value,
        }
    }

    /// Best value X can force, and the first move found that forces it
    pub fn max_value(&mut self, board: &Board) -> SearchResult {
        self.stats.nodes += 1;
        if board.is_terminal() {
            self.stats.leaves += 1;
            return SearchResult {
                value: board.utility(),
                best_move: None,
            };
        }

        let mut best = SearchResult {
            value: i32::MIN,
            best_move: None,
        };
        for mv in self.ordered_moves(board) {
            let Ok(child) = board.apply_move(mv) else {
                continue;
            };
            let value = self.min_value(&child).value;
            if value > best.value {
                best = SearchResult {
                    value,
                    best_move: Some(mv),
                };
            }
        }
        best
    }

    /// Best value O can force, and the first move found that forces it
    pub fn min_value(&mut self, board: &Board) -> SearchResult {
        self.stats.nodes += 1;
        if board.is_terminal() {
            self.stats.leaves += 1;
            return SearchResult {
                value: board.utility(),
                best_move: None,
            };
        }

        let mut best = SearchResult {
            value: i32::MAX,
            best_move: None,
        };
        for mv in self.ordered_moves(board) {
            let Ok(child) = board.apply_move(mv) else {
                continue;
            };
            let value = self.max_value(&child).value;
            if value < best.value {
                best = SearchResult {
                    value,
                    best_move: Some(mv),
                };
            }
        }
        best
    }

    /// Minimax value of every legal move, in row-major order
    pub fn evaluate_moves(&mut self, board: &Board) -> Vec<(Move, i32)> {
        let mut moves_with_values = Vec::new();
        for mv in board.legal_moves() {
            if let Ok(child) = board.apply_move(mv) {
                let value = self.value(&child);
                moves_with_values.push((mv, value));
            }
        }
        moves_with_values
    }

    /// Every move that reaches the optimal value, in row-major order
    pub fn optimal_moves(&mut self, board: &Board) -> Vec<Move> {
        let moves_with_values = self.evaluate_moves(board);
        let values = moves_with_values.iter().map(|&(_, value)| value);
        let best_value = match board.current_player() {
            Player::X => values.max(),
            Player::O => values.min(),
        };
        let Some(best_value) = best_value else {
            return Vec::new();
        };
        moves_with_values
            .into_iter()
            .filter(|&(_, value)| value == best_value)
            .map(|(mv, _)| mv)
            .collect()
    }

    /// Line of play when both sides follow [`Searcher::best_move`] to the end
    pub fn principal_variation(&mut self, board: &Board) -> Vec<Move> {
        let mut line = Vec::new();
        let mut current = *board;
        while let Some(mv) = self.best_move(&current) {
            let Ok(next) = current.apply_move(mv) else {
                break;
            };
            line.push(mv);
            current = next;
        }
        line
    }

    /// Legal moves in the configured order, with moves that complete a line
    /// for the player to move tried first.
    ///
    /// An immediate win is always worth the best value, so with strict
    /// comparison it is the move that gets kept.
    fn ordered_moves(&mut self, board: &Board) -> Vec<Move> {
        let mut moves = board.legal_moves();
        if self.order == MoveOrder::Shuffled {
            moves.shuffle(&mut self.rng);
        }
        let wins = LineAnalyzer::winning_moves(board.cells(), board.current_player());
        if !wins.is_empty() {
            // Stable, so the configured order still holds within each group
            moves.sort_by_key(|mv| !wins.contains(mv));
        }
        moves
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
