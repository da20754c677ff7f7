//! Exhaustive minimax solver for 3x3 tic-tac-toe
//!
//! This crate provides:
//! - The game rules: board state, legal moves, transitions, terminal detection
//! - Minimax search over the full game tree (no pruning, no caching)
//! - An agent port with minimax and random agents, and match play
//! - A command-line front end
//!
//! ```
//! use tictactoe_solver::{search, tictactoe};
//!
//! let board = tictactoe::initial_state();
//! let mv = search::best_move(&board).unwrap();
//! let next = tictactoe::apply_move(&board, mv).unwrap();
//! assert_eq!(tictactoe::current_player(&next), tictactoe::Player::O);
//! ```

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, InvalidMoveReason, Result};
pub use search::{MoveOrder, SearchConfig, SearchResult, Searcher};
pub use tictactoe::{Board, Cell, Move, Outcome, Player};
