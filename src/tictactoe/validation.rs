//! Board state validation logic

use std::collections::HashSet;

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check whether the board could arise from legal play starting with X
    pub fn is_valid(&self) -> bool {
        if !self.has_valid_piece_counts() {
            return false;
        }
        let count = self.count_pieces();

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner must have made the last move
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// X moves first, so X is level with O or exactly one ahead
    pub fn has_valid_piece_counts(&self) -> bool {
        let count = self.count_pieces();
        count.x == count.o || count.x == count.o + 1
    }

    /// Check if all completed lines for a player share at least one cell.
    ///
    /// Two lines can only be completed together by the single move that sits
    /// on both of them.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(self.cells(), player);
        if lines.len() < 2 {
            return true;
        }
        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }

    /// Count distinct boards reachable from the empty board, terminal ones included
    pub fn count_reachable_states() -> usize {
        let mut stack = vec![Board::new()];
        let mut seen = HashSet::new();

        while let Some(board) = stack.pop() {
            if !seen.insert(board) {
                continue;
            }
            for mv in board.legal_moves() {
                if let Ok(next) = board.apply_move(mv) {
                    stack.push(next);
                }
            }
        }

        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    #[test]
    fn test_initial_board_is_valid() {
        assert!(Board::new().is_valid());
    }

    #[test]
    fn test_o_ahead_is_invalid() {
        let board = Board::from_rows([
            [Cell::X, Cell::O, Cell::X],
            [Cell::O, Cell::X, Cell::O],
            [Cell::Empty, Cell::Empty, Cell::O],
        ]);
        assert!(!board.is_valid());
    }

    #[test]
    fn test_double_line_sharing_cell_is_valid() {
        // X X X
        // X O O
        // X O O
        let board = Board::from_rows([
            [Cell::X, Cell::X, Cell::X],
            [Cell::X, Cell::O, Cell::O],
            [Cell::X, Cell::O, Cell::O],
        ]);
        assert!(board.is_valid());
    }

    #[test]
    fn test_parallel_lines_are_invalid() {
        // X X X
        // O O .
        // X X X
        let board = Board::from_rows([
            [Cell::X, Cell::X, Cell::X],
            [Cell::O, Cell::O, Cell::Empty],
            [Cell::X, Cell::X, Cell::X],
        ]);
        assert!(!board.is_valid());
    }

    #[test]
    fn test_win_after_loser_moved_is_invalid() {
        // X completed a row but O has as many pieces, so O moved after the win
        let board = Board::from_rows([
            [Cell::X, Cell::X, Cell::X],
            [Cell::O, Cell::O, Cell::Empty],
            [Cell::O, Cell::Empty, Cell::Empty],
        ]);
        assert!(!board.is_valid());
        assert!(board.has_valid_piece_counts());
    }

    #[test]
    fn test_count_reachable_states() {
        assert_eq!(Board::count_reachable_states(), 5478);
    }
}
