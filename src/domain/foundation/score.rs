//! Score value object for option performance (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lowest accepted score.
pub const SCORE_MIN: u8 = 1;

/// Highest accepted score.
pub const SCORE_MAX: u8 = 10;

/// How well an option performs on one criterion, 1 (poor) to 10 (excellent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Creates a Score, returning an error if out of the 1-10 range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(SCORE_MIN..=SCORE_MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                SCORE_MIN as i64,
                SCORE_MAX as i64,
                value as i64,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the qualitative band for this score.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Qualitative banding of scores.
///
/// Band boundaries are policy, not laws: 1-3 poor, 4-6 average,
/// 7-9 good, 10 excellent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    Poor,
    Average,
    Good,
    Excellent,
}

impl ScoreBand {
    /// Maps a raw score value to its band.
    fn for_score(value: u8) -> Self {
        match value {
            0..=3 => ScoreBand::Poor,
            4..=6 => ScoreBand::Average,
            7..=9 => ScoreBand::Good,
            _ => ScoreBand::Excellent,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Poor => "Poor",
            ScoreBand::Average => "Average",
            ScoreBand::Good => "Good",
            ScoreBand::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
