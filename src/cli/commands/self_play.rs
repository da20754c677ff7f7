//! Self-play command - run the minimax agent against an opponent

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        config::{OpponentKind, Side, SolverConfig},
        output::{create_game_progress, indent, print_kv, print_section},
    },
    pipeline::{Agent, MatchSummary, MinimaxAgent, RandomAgent, run_series_with},
    tictactoe::{Game, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play the minimax agent against itself or a random opponent")]
pub struct SelfPlayArgs {
    /// Opponent for the minimax agent
    #[arg(long, value_enum)]
    pub opponent: Option<OpponentKind>,

    /// Number of games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Token the minimax agent controls
    #[arg(long, value_enum)]
    pub side: Option<Side>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Print the final board of every game
    #[arg(long)]
    pub show_games: bool,
}

fn build_opponent(kind: OpponentKind, solver: &SolverConfig, seed: Option<u64>) -> Box<dyn Agent> {
    match kind {
        OpponentKind::Minimax => {
            let mut agent = MinimaxAgent::with_config("Minimax".to_string(), solver.search);
            if let Some(seed) = seed {
                agent.set_rng_seed(seed.wrapping_add(1));
            }
            Box::new(agent)
        }
        OpponentKind::Random => match seed {
            Some(seed) => Box::new(RandomAgent::with_seed(
                "Random".to_string(),
                seed.wrapping_add(1),
            )),
            None => Box::new(RandomAgent::new("Random".to_string())),
        },
    }
}

fn print_summary(summary: &MatchSummary) {
    print_section("Self-play summary");
    print_kv("X", &summary.x_agent);
    print_kv("O", &summary.o_agent);
    print_kv("Games", &summary.games.to_string());
    print_kv("X wins", &summary.x_wins.to_string());
    print_kv("O wins", &summary.o_wins.to_string());
    print_kv("Draws", &summary.draws.to_string());
}

pub fn execute(args: SelfPlayArgs, config: &SolverConfig) -> Result<()> {
    let games = args.games.unwrap_or(config.self_play.games);
    let opponent_kind = args.opponent.unwrap_or(config.self_play.opponent);
    let side = Player::from(args.side.unwrap_or(config.self_play.side));
    let seed = args.seed.or(config.search.seed);

    let mut minimax = MinimaxAgent::with_config("Minimax".to_string(), config.search);
    if let Some(seed) = seed {
        minimax.set_rng_seed(seed);
    }
    let mut minimax: Box<dyn Agent> = Box::new(minimax);
    let mut opponent = build_opponent(opponent_kind, config, seed);

    let progress = (!args.json && !args.show_games).then(|| create_game_progress(games as u64));
    let on_game = |game: &Game| {
        if let Some(pb) = &progress {
            pb.inc(1);
        }
        if args.show_games {
            if let Ok(board) = game.current_state() {
                let outcome = board.outcome();
                println!("{}\n  -> {outcome}\n", indent(&board.to_string(), "  "));
            }
        }
    };
    let summary = match side {
        Player::X => run_series_with(minimax.as_mut(), opponent.as_mut(), games, on_game)?,
        Player::O => run_series_with(opponent.as_mut(), minimax.as_mut(), games, on_game)?,
    };
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}
