//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form
//! the vocabulary of the decision analysis domain.

mod errors;
mod ids;
mod score;
mod state_machine;
mod timestamp;
mod weight;

pub use errors::{ScoringError, ValidationError};
pub use ids::{CriterionId, OptionId, SessionId};
pub use score::{Score, ScoreBand, SCORE_MAX, SCORE_MIN};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use weight::{ImportanceBand, Weight, WEIGHT_MAX, WEIGHT_MIN};
