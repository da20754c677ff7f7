//! Analyze command - full minimax report for one board

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use super::parse_board_arg;
use crate::{
    cli::{
        config::SolverConfig,
        output::{format_number, indent, print_kv, print_section, print_subsection},
    },
    search::Searcher,
    tictactoe::{Board, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze a board with full minimax search")]
pub struct AnalyzeArgs {
    /// Board to analyze: 9 cells in row-major order, e.g. "X.O/.X./..O"
    #[arg(long, short = 'b', default_value = ".........")]
    pub board: String,

    /// Export the analysis as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct MoveValue {
    #[serde(rename = "move")]
    mv: Move,
    value: i32,
}

#[derive(Debug, Serialize)]
struct BoardAnalysis {
    board: String,
    outcome: Outcome,
    to_move: Player,
    utility: i32,
    value: i32,
    best_move: Option<Move>,
    move_values: Vec<MoveValue>,
    optimal_moves: Vec<Move>,
    principal_variation: Vec<Move>,
    nodes_searched: u64,
}

fn analyze_board(searcher: &mut Searcher, board: &Board) -> BoardAnalysis {
    let best_move = searcher.best_move(board);
    let nodes_searched = searcher.stats().nodes;

    BoardAnalysis {
        board: board.encode(),
        outcome: board.outcome(),
        to_move: board.current_player(),
        utility: board.utility(),
        value: searcher.value(board),
        best_move,
        move_values: searcher
            .evaluate_moves(board)
            .into_iter()
            .map(|(mv, value)| MoveValue { mv, value })
            .collect(),
        optimal_moves: searcher.optimal_moves(board),
        principal_variation: searcher.principal_variation(board),
        nodes_searched,
    }
}

fn describe_value(value: i32) -> &'static str {
    match value.signum() {
        1 => "X forces a win",
        -1 => "O forces a win",
        _ => "draw with best play",
    }
}

fn format_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return "-".to_string();
    }
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn execute(args: AnalyzeArgs, config: &SolverConfig) -> Result<()> {
    let board = parse_board_arg(&args.board, "--board")?;
    let mut searcher = Searcher::new(config.search);
    let analysis = analyze_board(&mut searcher, &board);

    print_section("Board analysis");
    println!("{}", indent(&board.to_string(), "  "));
    println!();
    print_kv("Outcome", &analysis.outcome.to_string());
    print_kv("Utility", &analysis.utility.to_string());

    if analysis.outcome == Outcome::Ongoing {
        print_kv("To move", &analysis.to_move.to_string());
        print_kv(
            "Minimax value",
            &format!("{} ({})", analysis.value, describe_value(analysis.value)),
        );
        if let Some(mv) = analysis.best_move {
            print_kv("Best move", &mv.to_string());
        }
        print_kv("Move order", searcher.move_order().as_str());
        print_kv("Nodes searched", &format_number(analysis.nodes_searched));

        print_subsection("Move values");
        for entry in &analysis.move_values {
            println!("  {}  {:>2}  {}", entry.mv, entry.value, describe_value(entry.value));
        }
        print_kv("Optimal moves", &format_moves(&analysis.optimal_moves));
        print_kv("Best line", &format_moves(&analysis.principal_variation));
    }

    if let Some(path) = args.export {
        let file = File::create(&path)
            .with_context(|| format!("failed to create export file {}", path.display()))?;
        serde_json::to_writer_pretty(file, &analysis)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_of_won_board() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let analysis = analyze_board(&mut Searcher::default(), &board);
        assert_eq!(analysis.outcome, Outcome::XWins);
        assert_eq!(analysis.best_move, None);
        assert!(analysis.move_values.is_empty());
        assert!(analysis.principal_variation.is_empty());
    }

    #[test]
    fn test_analysis_of_forced_win() {
        // X wins at (0, 2); any other move lets O win there
        let board = Board::from_string("XX./XOO/O..").unwrap();
        let analysis = analyze_board(&mut Searcher::default(), &board);
        assert_eq!(analysis.value, 1);
        assert_eq!(analysis.optimal_moves, vec![Move::new(0, 2)]);
        assert_eq!(analysis.principal_variation, vec![Move::new(0, 2)]);
    }
}
