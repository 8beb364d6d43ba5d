//! Score table for search outcomes and streak heuristics

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Scores used by the search.
///
/// `win`/`loss`/`draw` are returned for terminal positions, the streak
/// weights are summed by the depth-limit heuristic. Defaults are the
/// reference values and are what the engine is tuned against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// AI has a line
    pub win: i32,
    /// Opponent has a line
    pub loss: i32,
    /// Board full, no line
    pub draw: i32,
    /// Weight for a streak of two
    pub two: i32,
    /// Weight for a streak of three
    pub three: i32,
    /// Weight for a streak of four
    pub four: i32,
}

impl ScoreConfig {
    pub const WIN: i32 = 100_000;
    pub const LOSS: i32 = -100_000;
    pub const DRAW: i32 = 0;
    pub const TWO_IN_ROW: i32 = 10;
    pub const THREE_IN_ROW: i32 = 100;
    pub const FOUR_IN_ROW: i32 = 5_000;

    /// Heuristic weight for a forward streak of `len` stones.
    ///
    /// Lengths other than 2, 3 and 4 score nothing: singles carry no
    /// information and full lines are terminal.
    #[inline]
    pub fn streak_score(&self, len: usize) -> i32 {
        match len {
            2 => self.two,
            3 => self.three,
            4 => self.four,
            _ => 0,
        }
    }

    /// Sentinels must be ordered `loss < draw < win` and streak weights
    /// must not be negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.loss < self.draw && self.draw < self.win) {
            return Err(Error::config(format!(
                "expected loss < draw < win, got loss={} draw={} win={}",
                self.loss, self.draw, self.win
            )));
        }
        if self.two < 0 || self.three < 0 || self.four < 0 {
            return Err(Error::config(format!(
                "streak weights must be non-negative, got two={} three={} four={}",
                self.two, self.three, self.four
            )));
        }
        Ok(())
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            win: Self::WIN,
            loss: Self::LOSS,
            draw: Self::DRAW,
            two: Self::TWO_IN_ROW,
            three: Self::THREE_IN_ROW,
            four: Self::FOUR_IN_ROW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_scores() {
        let scores = ScoreConfig::default();
        assert_eq!(scores.streak_score(1), 0);
        assert_eq!(scores.streak_score(2), 10);
        assert_eq!(scores.streak_score(3), 100);
        assert_eq!(scores.streak_score(4), 5_000);
        assert_eq!(scores.streak_score(5), 0);
    }

    #[test]
    fn test_default_validates() {
        assert!(ScoreConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_sentinels_rejected() {
        let scores = ScoreConfig {
            win: -5,
            ..ScoreConfig::default()
        };
        assert!(matches!(scores.validate(), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_negative_streak_weight_rejected() {
        let scores = ScoreConfig {
            three: -1,
            ..ScoreConfig::default()
        };
        assert!(matches!(scores.validate(), Err(Error::InvalidConfig { .. })));

        let huge = ScoreConfig {
            two: i32::MAX,
            ..ScoreConfig::default()
        };
        assert!(huge.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let scores: ScoreConfig = serde_json::from_str(r#"{"four": 4000}"#).unwrap();
        assert_eq!(scores.four, 4000);
        assert_eq!(scores.win, ScoreConfig::WIN);
        assert_eq!(scores.two, ScoreConfig::TWO_IN_ROW);
    }
}
