//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Move, Player};

/// Winning line indices on the 3x3 board, in scan order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line holding three identical pieces, with the piece that fills it.
    ///
    /// Lines are scanned rows first, then columns, then diagonals.
    pub fn first_complete_line(cells: &[Cell; 9]) -> Option<([usize; 3], Cell)> {
        WINNING_LINES.iter().find_map(|line| {
            let [a, b, c] = *line;
            match cells[a] {
                Cell::Empty => None,
                piece @ (Cell::X | Cell::O) => {
                    (cells[b] == piece && cells[c] == piece).then_some((*line, piece))
                }
            }
        })
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// All lines the player has completed
    pub fn completed_lines(cells: &[Cell; 9], player: Player) -> Vec<[usize; 3]> {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| cells[idx] == target))
            .copied()
            .collect()
    }

    /// Find all cells that would immediately complete a line for the player,
    /// in row-major order
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<Move> {
        let mut moves: Vec<Move> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .filter_map(Move::from_index)
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // opponent piece in line
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}
