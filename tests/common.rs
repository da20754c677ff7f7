//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use tictactoe_solver::tictactoe::{Board, Move};

/// Every distinct board reachable from the empty board, terminal ones included.
pub fn reachable_boards() -> Vec<Board> {
    let mut stack = vec![Board::new()];
    let mut seen = HashSet::new();
    let mut boards = Vec::new();

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        for mv in board.legal_moves() {
            stack.push(board.apply_move(mv).expect("legal move must apply"));
        }
    }

    boards
}

/// Replay `(row, col)` pairs from the empty board.
pub fn play(moves: &[(usize, usize)]) -> Board {
    moves.iter().fold(Board::new(), |board, &(r, c)| {
        board
            .apply_move(Move::new(r, c))
            .unwrap_or_else(|e| panic!("move ({r}, {c}) failed: {e}"))
    })
}
