//! Move ordering and search configuration

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Order in which a node's legal moves are tried.
///
/// Minimax keeps the first move that reaches the best value, so the order
/// decides which of several equally good moves is returned. Values are never
/// affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveOrder {
    /// Row-major order; ties go to the top-left-most move
    #[default]
    RowMajor,
    /// Moves are shuffled at every node with a seeded RNG
    Shuffled,
}

impl MoveOrder {
    pub const VARIANTS: [&'static str; 2] = ["row-major", "shuffled"];

    pub fn as_str(self) -> &'static str {
        match self {
            MoveOrder::RowMajor => "row-major",
            MoveOrder::Shuffled => "shuffled",
        }
    }
}

impl fmt::Display for MoveOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveOrder {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "row-major" | "row_major" | "rowmajor" => Ok(MoveOrder::RowMajor),
            "shuffled" | "random" => Ok(MoveOrder::Shuffled),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "unknown move order '{other}'. Expected one of: {}",
                    Self::VARIANTS.join(", ")
                ),
            }),
        }
    }
}

/// Configuration for a [`Searcher`](super::Searcher)
///
/// # Examples
///
/// ```
/// use tictactoe_solver::search::{MoveOrder, SearchConfig};
///
/// let config = SearchConfig::new()
///     .with_move_order(MoveOrder::Shuffled)
///     .with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub move_order: MoveOrder,
    /// Seed for [`MoveOrder::Shuffled`]; a random seed is drawn when absent
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_move_order(mut self, order: MoveOrder) -> Self {
        self.move_order = order;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_order() {
        assert_eq!("row-major".parse::<MoveOrder>().unwrap(), MoveOrder::RowMajor);
        assert_eq!("Shuffled".parse::<MoveOrder>().unwrap(), MoveOrder::Shuffled);
        let err = "spiral".parse::<MoveOrder>().unwrap_err();
        assert!(err.to_string().contains("row-major, shuffled"));
    }

    #[test]
    fn test_default_config_is_row_major() {
        let config = SearchConfig::default();
        assert_eq!(config.move_order, MoveOrder::RowMajor);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_config_json_uses_kebab_case() {
        let config = SearchConfig::new().with_move_order(MoveOrder::Shuffled);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"shuffled\""));
        let parsed: SearchConfig = serde_json::from_str("{\"move_order\":\"row-major\"}").unwrap();
        assert_eq!(parsed, SearchConfig::default());
    }
}
