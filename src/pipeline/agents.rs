//! Agent implementations: the minimax solver and a random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::Agent,
    search::{SearchConfig, Searcher},
    tictactoe::{Board, Move},
};

/// Optimal agent backed by exhaustive minimax
pub struct MinimaxAgent {
    name: String,
    config: SearchConfig,
    searcher: Searcher,
}

impl MinimaxAgent {
    /// Create a minimax agent with row-major tie-breaking
    pub fn new(name: String) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: String, config: SearchConfig) -> Self {
        Self {
            name,
            config,
            searcher: Searcher::new(config),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        self.searcher.best_move(board).ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.searcher = Searcher::new(self.config.with_seed(seed));
    }
}

/// Random policy agent (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent() {
        let mut agent = RandomAgent::with_seed("Random".to_string(), 3);
        let board = Board::new();
        let mv = agent
            .select_move(&board)
            .expect("random agent should supply a move");
        assert!(board.is_legal(mv));
    }

    #[test]
    fn test_random_agent_is_reproducible() {
        let board = Board::from_string("X...O....").unwrap();
        let mut a = RandomAgent::with_seed("A".to_string(), 99);
        let mut b = RandomAgent::with_seed("B".to_string(), 99);
        for _ in 0..10 {
            assert_eq!(a.select_move(&board).unwrap(), b.select_move(&board).unwrap());
        }
    }

    #[test]
    fn test_minimax_agent_takes_the_win() {
        let mut agent = MinimaxAgent::new("Minimax".to_string());
        let board = Board::from_string("XX./OO./...").unwrap();
        assert_eq!(agent.select_move(&board).unwrap(), Move::new(0, 2));
    }

    #[test]
    fn test_agents_refuse_terminal_boards() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let mut minimax = MinimaxAgent::new("Minimax".to_string());
        let mut random = RandomAgent::with_seed("Random".to_string(), 1);
        assert!(matches!(minimax.select_move(&board), Err(Error::NoValidMoves)));
        assert!(matches!(random.select_move(&board), Err(Error::NoValidMoves)));
    }
}
