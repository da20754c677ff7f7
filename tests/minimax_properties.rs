//! Minimax search: values, chosen moves, and optimal play

mod common;

use tictactoe_solver::{
    pipeline::{MinimaxAgent, play_match},
    search::{self, MoveOrder, SearchConfig, Searcher},
    tictactoe::{
        Board, Cell, GameOutcome, LineAnalyzer, Move, Player, apply_move, initial_state,
        is_terminal, utility,
    },
};

use common::{play, reachable_boards};

/// Boards with at least `min_pieces` placed, which keeps each search small
fn late_boards(min_pieces: usize) -> Vec<Board> {
    reachable_boards()
        .into_iter()
        .filter(|b| {
            let count = b.count_pieces();
            count.x + count.o >= min_pieces
        })
        .collect()
}

mod best_move {
    use super::*;

    #[test]
    fn none_iff_terminal() {
        let mut searcher = Searcher::default();
        for board in late_boards(4) {
            let mv = searcher.best_move(&board);
            assert_eq!(mv.is_none(), is_terminal(&board), "board {}", board.encode());
            if let Some(mv) = mv {
                assert!(board.is_legal(mv));
            }
        }
    }

    #[test]
    fn terminal_board_returns_none() {
        let board = Board::from_rows([
            [Cell::X, Cell::X, Cell::X],
            [Cell::O, Cell::O, Cell::Empty],
            [Cell::Empty, Cell::Empty, Cell::Empty],
        ]);
        assert_eq!(search::best_move(&board), None);
    }

    #[test]
    fn x_takes_immediate_win() {
        // X X .
        // O O .
        // . . .
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(search::best_move(&board), Some(Move::new(0, 2)));
    }

    #[test]
    fn o_blocks_the_only_threat() {
        // X X .
        // . O .
        // . . .
        let board = play(&[(0, 0), (1, 1), (0, 1)]);
        assert_eq!(search::best_move(&board), Some(Move::new(0, 2)));
        assert_eq!(search::min_value(&board).value, 0);
    }

    #[test]
    fn takes_an_immediate_win_whenever_one_exists() {
        let mut searcher = Searcher::default();
        let mut checked = [0usize; 2];
        for board in reachable_boards() {
            if board.is_terminal() {
                continue;
            }
            let player = board.current_player();
            let wins = LineAnalyzer::winning_moves(board.cells(), player);
            if wins.is_empty() {
                continue;
            }
            let mv = searcher.best_move(&board).unwrap();
            assert!(wins.contains(&mv), "board {} chose {mv}", board.encode());
            let next = apply_move(&board, mv).unwrap();
            assert_eq!(next.winner(), Some(player));
            checked[match player {
                Player::X => 0,
                Player::O => 1,
            }] += 1;
        }
        assert!(checked.iter().all(|&n| n > 0));
    }
}

mod values {
    use super::*;

    #[test]
    fn empty_board_is_a_draw() {
        let result = search::max_value(&initial_state());
        assert_eq!(result.value, 0);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn terminal_values_match_utility() {
        for board in late_boards(5).into_iter().filter(|b| b.is_terminal()) {
            let max = search::max_value(&board);
            let min = search::min_value(&board);
            assert_eq!(max.value, utility(&board));
            assert_eq!(min.value, utility(&board));
            assert_eq!(max.best_move, None);
            assert_eq!(min.best_move, None);
        }
    }

    #[test]
    fn corner_opening_needs_centre_reply() {
        let board = play(&[(0, 0)]);
        let values = search::evaluate_moves(&board);
        for (mv, value) in values {
            let expected = if mv == Move::new(1, 1) { 0 } else { 1 };
            assert_eq!(value, expected, "reply {mv}");
        }
    }

    #[test]
    fn best_move_achieves_the_node_value() {
        let mut searcher = Searcher::default();
        for board in late_boards(5) {
            let Some(mv) = searcher.best_move(&board) else {
                continue;
            };
            let value = searcher.value(&board);
            let child = apply_move(&board, mv).unwrap();
            assert_eq!(searcher.value(&child), value, "board {}", board.encode());
        }
    }
}

mod move_order {
    use super::*;

    #[test]
    fn shuffled_order_keeps_values_and_picks_an_optimal_move() {
        let board = play(&[(1, 1), (0, 0)]);
        let optimal = search::optimal_moves(&board);
        let row_major = search::max_value(&board);

        for seed in 0..8 {
            let config = SearchConfig::new()
                .with_move_order(MoveOrder::Shuffled)
                .with_seed(seed);
            let mut searcher = Searcher::new(config);
            let result = searcher.max_value(&board);
            assert_eq!(result.value, row_major.value);
            let mv = result.best_move.unwrap();
            assert!(optimal.contains(&mv), "seed {seed} chose {mv}");
        }
    }

    #[test]
    fn row_major_breaks_ties_towards_first_cell() {
        // Several X moves hold the draw; the first in row-major order is kept
        let board = play(&[(1, 1), (0, 0)]);
        let optimal = search::optimal_moves(&board);
        assert_eq!(search::best_move(&board), optimal.first().copied());
    }
}

mod optimal_play {
    use super::*;

    #[test]
    fn self_play_from_empty_board_draws() {
        let mut x = MinimaxAgent::new("X".to_string());
        let mut o = MinimaxAgent::new("O".to_string());
        let game = play_match(&mut x, &mut o).unwrap();
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert_eq!(utility(&game.current_state().unwrap()), 0);
    }

    #[test]
    fn principal_variation_reaches_a_draw() {
        let board = play(&[(0, 0), (1, 1)]);
        let line = search::principal_variation(&board);
        let end = line
            .iter()
            .fold(board, |b, &mv| apply_move(&b, mv).unwrap());
        assert!(end.is_terminal());
        assert_eq!(utility(&end), 0);
    }
}
