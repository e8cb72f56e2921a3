//! Analysis module - pure services over a completed dataset.
//!
//! All functions here are stateless and side-effect free: they take a
//! fully-validated dataset (plus derived results) and return computed
//! values. Nothing in this module performs I/O or holds cross-call
//! state.
//!
//! # Components
//!
//! - `ScoringEngine` - weighted totals, normalization, stable ranking
//! - `EdgeCaseDetector` - tie / equal-weight / close-competition flags
//! - `RecommendationComposer` - the structured explanation report
//! - `policy` - tunable threshold constants

pub mod policy;

mod edge_case_detector;
mod recommendation;
mod scoring_engine;

pub use edge_case_detector::{
    EdgeCaseDetector, EdgeCaseFlags, TEMPLATE_CLOSE_COMPETITION, TEMPLATE_EQUAL_WEIGHTS,
    TEMPLATE_TIED_TOP,
};
pub use recommendation::{
    Caution, Comparison, DecisiveFactor, Insights, OptionBreakdown, RankingEntry, RationaleEntry,
    RecommendationComposer, Report, TopPriority, Winner,
};
pub use scoring_engine::{CriterionContribution, Ranking, ScoringEngine, WeightedResult};
