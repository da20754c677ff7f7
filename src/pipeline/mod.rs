//! Agents and match play
//!
//! This module provides:
//! - Agent implementations (minimax, random baseline)
//! - Single games and series between two agents

pub mod agents;
pub mod matches;

pub use agents::{MinimaxAgent, RandomAgent};
pub use matches::{MatchSummary, play_match, run_series, run_series_with};

pub use crate::ports::Agent;
