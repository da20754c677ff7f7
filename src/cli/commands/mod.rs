//! Subcommands of the `tictactoe` binary

pub mod analyze;
pub mod best_move;
pub mod self_play;

use anyhow::{Context, Result};

use crate::tictactoe::Board;

/// Parse a board argument, attaching the flag name to any error
pub(crate) fn parse_board_arg(text: &str, flag: &str) -> Result<Board> {
    Board::from_string(text).with_context(|| format!("invalid {flag} value '{text}'"))
}
