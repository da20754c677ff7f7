//! Shared configuration types for CLI commands
//!
//! Settings come from an optional JSON file and are then overridden by
//! command-line flags.

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{Error, search::SearchConfig, tictactoe::Player};

/// Opponent faced by the minimax agent in self-play
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpponentKind {
    /// Another minimax agent
    #[default]
    Minimax,
    /// Uniformly random legal moves
    Random,
}

/// Which token the minimax agent controls
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
pub enum Side {
    #[default]
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

/// Self-play configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games to play
    pub games: usize,

    /// Opponent type
    pub opponent: OpponentKind,

    /// Token controlled by the minimax agent
    pub side: Side,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            opponent: OpponentKind::default(),
            side: Side::default(),
        }
    }
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub search: SearchConfig,
    pub self_play: SelfPlayConfig,
}

impl SolverConfig {
    /// Read a JSON configuration file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON for
    /// this layout.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file '{}'", path.display()),
            source,
        })?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the defaults
    ///
    /// # Errors
    ///
    /// See [`SolverConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
