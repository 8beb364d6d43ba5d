//! Configuration for creating an AI player.

use serde::{Deserialize, Serialize};

use crate::board::Stone;
use crate::error::{Error, Result};
use crate::eval::ScoreConfig;

/// Configuration for an [`AIEngine`](crate::AIEngine).
///
/// Builder-style; validated when the engine is created.
///
/// # Examples
///
/// ```
/// use gomoku::{EngineConfig, Stone};
///
/// let config = EngineConfig::new(Stone::White, Stone::Black)
///     .with_depth(2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Plies searched per decision, root move included
    #[serde(default = "EngineConfig::default_depth")]
    pub depth: u32,
    /// Stone the engine plays
    pub ai: Stone,
    /// Stone the other side plays
    pub opponent: Stone,
    /// Terminal sentinels and heuristic weights
    #[serde(default)]
    pub scores: ScoreConfig,
    /// Random seed for the tie-break; `None` draws from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub const DEFAULT_DEPTH: u32 = 3;

    fn default_depth() -> u32 {
        Self::DEFAULT_DEPTH
    }

    /// Create a configuration with default depth, scores and no seed.
    pub fn new(ai: Stone, opponent: Stone) -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            ai,
            opponent,
            scores: ScoreConfig::default(),
            seed: None,
        }
    }

    /// Configuration for `ai` against the other color.
    pub fn for_stone(ai: Stone) -> Self {
        Self::new(ai, ai.opponent())
    }

    /// Set the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the tie-break seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the score table.
    pub fn with_scores(mut self, scores: ScoreConfig) -> Self {
        self.scores = scores;
        self
    }

    /// Reject configurations the search cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(Error::config("search depth must be at least 1"));
        }
        if self.ai == Stone::Empty || self.opponent == Stone::Empty {
            return Err(Error::config("player stones must not be Empty"));
        }
        if self.ai == self.opponent {
            return Err(Error::config(format!(
                "AI and opponent both play {:?}",
                self.ai
            )));
        }
        self.scores.validate()
    }
}
