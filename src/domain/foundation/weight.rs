//! Weight value object for criterion importance (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lowest accepted weight.
pub const WEIGHT_MIN: u8 = 1;

/// Highest accepted weight.
pub const WEIGHT_MAX: u8 = 10;

/// Relative importance of a criterion, 1 (barely matters) to 10 (critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(u8);

impl Weight {
    /// Creates a Weight, returning an error if out of the 1-10 range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(WEIGHT_MIN..=WEIGHT_MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "weight",
                WEIGHT_MIN as i64,
                WEIGHT_MAX as i64,
                value as i64,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the qualitative importance band for this weight.
    pub fn band(&self) -> ImportanceBand {
        ImportanceBand::for_weight(self.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Qualitative banding of weights.
///
/// Band boundaries are policy, not laws: 1-3 low, 4-6 moderate,
/// 7-9 high, 10 critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImportanceBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl ImportanceBand {
    /// Maps a raw weight value to its band.
    fn for_weight(value: u8) -> Self {
        match value {
            0..=3 => ImportanceBand::Low,
            4..=6 => ImportanceBand::Moderate,
            7..=9 => ImportanceBand::High,
            _ => ImportanceBand::Critical,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ImportanceBand::Low => "Low importance",
            ImportanceBand::Moderate => "Moderate importance",
            ImportanceBand::High => "High importance",
            ImportanceBand::Critical => "Critical",
        }
    }
}
