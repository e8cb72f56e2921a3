//! Session-specific error type.

use thiserror::Error;

use crate::domain::foundation::{ScoringError, ValidationError};

/// Errors surfaced from a session turn.
///
/// `Validation` is user-correctable: the stage does not advance and
/// the driver re-prompts with the guidance text. `Scoring` indicates a
/// sequencing bug (the stage machine should never hand the engine an
/// incomplete dataset) and is not recoverable within the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// Input arrived after the report was produced.
    #[error("Analysis is already complete. Restart to begin a new decision.")]
    AnalysisComplete,
}

impl SessionError {
    /// Returns true if the same stage should simply be re-prompted.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, SessionError::Validation(_))
    }

    /// Text the driver can show the user for this error.
    pub fn guidance(&self) -> String {
        match self {
            SessionError::Validation(err) => err.guidance(),
            SessionError::Scoring(err) => err.to_string(),
            SessionError::AnalysisComplete => self.to_string(),
        }
    }
}
