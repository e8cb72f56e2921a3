//! Decision module - the accumulated dataset for one analysis.
//!
//! A dataset is built incrementally over a conversation and is
//! append-only: description, then options, then criteria, then
//! weights, then the score matrix. Restarting discards the whole
//! dataset; nothing outlives one analysis session.

mod criterion;
mod dataset;
mod description;
mod option;
mod score_matrix;

pub use criterion::Criterion;
pub use dataset::DecisionDataset;
pub use description::DecisionDescription;
pub use option::DecisionOption;
pub use score_matrix::{ScoreMatrix, ScoreMatrixBuilder};
