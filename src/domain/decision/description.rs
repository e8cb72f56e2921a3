//! Validated free-text description of the decision being made.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The decision under analysis, e.g. "Choosing between two job offers".
///
/// Constructed only by the input validator; immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionDescription(String);

impl DecisionDescription {
    /// Wraps text that already passed semantic validation.
    ///
    /// Kept crate-private so the validator stays the single entry point.
    pub(crate) fn from_validated(text: String) -> Self {
        Self(text)
    }

    /// Returns the description text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecisionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
