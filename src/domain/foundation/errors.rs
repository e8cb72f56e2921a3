//! Error types for the domain layer.

use thiserror::Error;

/// Errors produced while validating raw user input.
///
/// Every variant is user-correctable: the front-end surfaces the error
/// message together with [`ValidationError::guidance`] and re-prompts
/// the same field. Validation never advances the conversation stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is too short: need at least {min} characters, got {actual}")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Field '{field}' must be a whole number")]
    NotNumeric { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("'{name}' has already been entered for '{field}'")]
    Duplicate { field: String, name: String },

    #[error("Field '{field}' needs at least one letter, not just digits or symbols")]
    NotDescriptive { field: String },

    #[error("Field '{field}' does not look like a real name")]
    Gibberish { field: String },

    #[error("The text does not describe a decision: {reason}")]
    NotDecisionLike { reason: String },

    #[error("Reply 'continue' to proceed with equal weights, or restart to adjust them")]
    NotConfirmed,

    #[error("Invalid state transition: {detail}")]
    InvalidTransition { detail: String },
}

impl ValidationError {
    /// Creates a too-short validation error.
    pub fn too_short(field: impl Into<String>, min: usize, actual: usize) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates a non-numeric validation error.
    pub fn not_numeric(field: impl Into<String>) -> Self {
        ValidationError::NotNumeric {
            field: field.into(),
        }
    }

    /// Creates an out-of-range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates a duplicate-name validation error.
    pub fn duplicate(field: impl Into<String>, name: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            name: name.into(),
        }
    }

    /// Creates a not-descriptive validation error.
    pub fn not_descriptive(field: impl Into<String>) -> Self {
        ValidationError::NotDescriptive {
            field: field.into(),
        }
    }

    /// Creates a gibberish-input validation error.
    pub fn gibberish(field: impl Into<String>) -> Self {
        ValidationError::Gibberish {
            field: field.into(),
        }
    }

    /// Creates a not-decision-like validation error.
    pub fn not_decision_like(reason: impl Into<String>) -> Self {
        ValidationError::NotDecisionLike {
            reason: reason.into(),
        }
    }

    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::TooShort { field, .. }
            | ValidationError::NotNumeric { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Duplicate { field, .. }
            | ValidationError::NotDescriptive { field }
            | ValidationError::Gibberish { field } => field,
            ValidationError::NotDecisionLike { .. } => "decision",
            ValidationError::NotConfirmed => "confirmation",
            ValidationError::InvalidTransition { .. } => "stage",
        }
    }

    /// Returns re-prompt guidance suitable for showing to the user.
    pub fn guidance(&self) -> String {
        match self {
            ValidationError::TooShort { field, min, .. } if field == "decision" => format!(
                "Describe the decision in at least {} characters, \
                 e.g. 'Choosing between two job offers'.",
                min
            ),
            ValidationError::TooShort { field, min, .. } => {
                format!("Enter a meaningful {} of at least {} characters.", field, min)
            }
            ValidationError::NotNumeric { field } => {
                format!("Enter the {} as a plain number, digits only.", field)
            }
            ValidationError::OutOfRange { field, min, max, .. } => {
                format!("Enter a {} between {} and {}.", field, min, max)
            }
            ValidationError::Duplicate { field, .. } => {
                format!("Each {} must be unique; enter a different one.", field)
            }
            ValidationError::NotDescriptive { field } => {
                format!("Enter a descriptive {}, not just numbers or symbols.", field)
            }
            ValidationError::Gibberish { field } => {
                format!("Enter a real, readable {} (e.g. a product, place, or plan).", field)
            }
            ValidationError::NotDecisionLike { .. } => "Describe an actual choice, mentioning what \
                 is being compared, e.g. 'Deciding which internship to accept'."
                .to_string(),
            ValidationError::NotConfirmed => {
                "Reply 'continue' to keep equal weights, or restart to adjust them.".to_string()
            }
            ValidationError::InvalidTransition { .. } => {
                "Restart to begin a new analysis.".to_string()
            }
        }
    }
}

/// Errors produced by the scoring engine.
///
/// Unlike [`ValidationError`], these are not user-correctable.
/// `EmptyInput` means the dataset violates the size rules before any
/// scoring began; `IncompleteData` means the driving state machine
/// invoked scoring before the score matrix was dense, which is a
/// sequencing bug and is logged as such.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("Cannot score: no {what} were provided")]
    EmptyInput { what: String },

    #[error("Score matrix is incomplete: {} entries missing", missing.len())]
    IncompleteData { missing: Vec<String> },
}

impl ScoringError {
    /// Creates an empty-input error for the named collection.
    pub fn empty_input(what: impl Into<String>) -> Self {
        ScoringError::EmptyInput { what: what.into() }
    }

    /// Creates an incomplete-data error listing the missing entries.
    pub fn incomplete(missing: Vec<String>) -> Self {
        ScoringError::IncompleteData { missing }
    }
}
