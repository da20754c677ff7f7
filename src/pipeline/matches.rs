//! Running games between two agents

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Agent,
    tictactoe::{Game, GameOutcome, Player},
};

/// Play one game from the empty board; `x` moves first
///
/// # Errors
///
/// Propagates agent failures and illegal moves returned by an agent.
pub fn play_match(x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
    let mut game = Game::new();
    let mut board = game.current_state()?;

    while !game.is_over() {
        let player = board.current_player();
        let mv = match player {
            Player::X => x.select_move(&board)?,
            Player::O => o.select_move(&board)?,
        };
        let name = match player {
            Player::X => x.name(),
            Player::O => o.name(),
        };
        debug!("{name} ({player}) plays {mv}");
        board = game.play(mv)?;
    }

    Ok(game)
}

/// Tally of a series of games
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub x_agent: String,
    pub o_agent: String,
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play `games` games between the same two agents
///
/// # Errors
///
/// Stops at the first game that fails.
pub fn run_series(x: &mut dyn Agent, o: &mut dyn Agent, games: usize) -> Result<MatchSummary> {
    run_series_with(x, o, games, |_| {})
}

/// Like [`run_series`], calling `on_game` after every finished game
///
/// # Errors
///
/// Stops at the first game that fails.
pub fn run_series_with<F>(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    games: usize,
    mut on_game: F,
) -> Result<MatchSummary>
where
    F: FnMut(&Game),
{
    let mut summary = MatchSummary {
        x_agent: x.name().to_string(),
        o_agent: o.name().to_string(),
        ..MatchSummary::default()
    };

    for _ in 0..games {
        let game = play_match(x, o)?;
        if let Some(outcome) = game.outcome {
            summary.record(outcome);
        }
        on_game(&game);
    }

    info!(
        "{} vs {}: {} games, X wins {}, O wins {}, draws {}",
        summary.x_agent, summary.o_agent, summary.games, summary.x_wins, summary.o_wins, summary.draws
    );
    Ok(summary)
}
