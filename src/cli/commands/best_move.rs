//! Best-move command - print the minimax move for a board

use anyhow::Result;
use clap::Parser;

use super::parse_board_arg;
use crate::{
    cli::config::SolverConfig,
    search::{MoveOrder, Searcher},
};

#[derive(Parser, Debug)]
#[command(about = "Print the optimal move for a board")]
pub struct BestMoveArgs {
    /// Board to solve: 9 cells in row-major order, e.g. "X.O/.X./..O"
    #[arg(long, short = 'b')]
    pub board: String,

    /// Order in which moves are tried (row-major or shuffled); decides ties
    #[arg(long)]
    pub order: Option<String>,

    /// Random seed for the shuffled order
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: BestMoveArgs, config: &SolverConfig) -> Result<()> {
    let board = parse_board_arg(&args.board, "--board")?;

    let mut search_config = config.search;
    if let Some(order) = args.order.as_deref() {
        search_config.move_order = order.parse::<MoveOrder>()?;
    }
    if let Some(seed) = args.seed {
        search_config.seed = Some(seed);
    }

    let mut searcher = Searcher::new(search_config);
    match searcher.best_move(&board) {
        Some(mv) => println!(
            "{} plays {mv} (row {}, col {})",
            board.current_player(),
            mv.row,
            mv.col
        ),
        None => println!("No move: the game is over ({})", board.outcome()),
    }

    Ok(())
}
