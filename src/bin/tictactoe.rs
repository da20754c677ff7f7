//! Tic-tac-toe solver CLI
//!
//! This CLI provides:
//! - Full minimax analysis of a board
//! - The optimal move for a board
//! - Self-play matches against minimax or random opponents

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tictactoe_solver::cli::{commands, config::SolverConfig};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Exhaustive minimax solver for tic-tac-toe", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log search statistics and moves
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a board: outcome, move values, best line
    Analyze(commands::analyze::AnalyzeArgs),

    /// Print the optimal move for a board
    BestMove(commands::best_move::BestMoveArgs),

    /// Run matches between the minimax agent and an opponent
    SelfPlay(commands::self_play::SelfPlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    simple_logger::init_with_level(level).context("failed to initialise logger")?;

    let config = SolverConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &config),
        Commands::BestMove(args) => commands::best_move::execute(args, &config),
        Commands::SelfPlay(args) => commands::self_play::execute(args, &config),
    }
}
