//! Tunable policy thresholds for the analysis services.
//!
//! None of these values come from a formal sensitivity analysis; they
//! are conventions, kept in one place so they can be adjusted without
//! touching algorithm code.

/// Absolute gap (0-10 scale) below which the top two normalized
/// scores count as tied.
pub const TIE_THRESHOLD: f64 = 0.01;

/// Relative margin below which the runner-up counts as close
/// competition, when the result is not already a tie.
pub const CLOSE_COMPETITION_MARGIN: f64 = 0.07;

/// Tolerance for treating two normalized scores as exactly equal when
/// building the ranking. Ties at this tolerance keep entry order.
pub const SCORE_EQUALITY_EPSILON: f64 = 1e-9;

/// Tolerance for the contributions-sum-to-total invariant.
pub const CONTRIBUTION_TOLERANCE: f64 = 1e-6;

/// Normalized-score spread below which options are reported as near
/// equivalent.
pub const NEAR_EQUIVALENT_SPREAD: f64 = 1.0;

/// Most decisive factors reported in the winner/runner-up comparison.
pub const MAX_DECISIVE_FACTORS: usize = 3;
