//! Edge case detector - ties, equal weights, close competition.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Weight;

use super::policy::{CLOSE_COMPETITION_MARGIN, TIE_THRESHOLD};
use super::Ranking;

/// Message template key for a tied top result.
pub const TEMPLATE_TIED_TOP: &str = "edge.tied_top";

/// Message template key for uniformly equal weights.
pub const TEMPLATE_EQUAL_WEIGHTS: &str = "edge.equal_weights";

/// Message template key for a close runner-up.
pub const TEMPLATE_CLOSE_COMPETITION: &str = "edge.close_competition";

/// Degenerate-result flags, computed once per completed ranking.
///
/// The engine only exposes these signals (and their message template
/// keys); whether to pause and ask the user anything is the
/// conversational driver's call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeCaseFlags {
    /// Top two normalized scores differ by less than the tie threshold.
    pub tied_top: bool,
    /// Every criterion carries the identical weight.
    pub equal_weights: bool,
    /// Runner-up is within the close-competition margin but not tied.
    pub close_competition: bool,
}

impl EdgeCaseFlags {
    /// Returns true if any flag is set.
    pub fn any(&self) -> bool {
        self.tied_top || self.equal_weights || self.close_competition
    }

    /// Returns the message template keys for the active flags.
    pub fn template_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.tied_top {
            keys.push(TEMPLATE_TIED_TOP);
        }
        if self.equal_weights {
            keys.push(TEMPLATE_EQUAL_WEIGHTS);
        }
        if self.close_competition {
            keys.push(TEMPLATE_CLOSE_COMPETITION);
        }
        keys
    }
}

/// Inspection of a completed ranking for ambiguous or degenerate
/// results. Pure; never mutates the ranking.
pub struct EdgeCaseDetector;

impl EdgeCaseDetector {
    /// Detects edge cases in a ranking given the original weights.
    ///
    /// `tied_top` supersedes `close_competition`: a near-but-not-exact
    /// margin is only flagged when the result is not already a tie.
    pub fn detect(ranking: &Ranking, weights: &[Weight]) -> EdgeCaseFlags {
        let equal_weights = Self::equal_weights(weights);

        let Some(runner_up) = ranking.runner_up() else {
            return EdgeCaseFlags {
                equal_weights,
                ..EdgeCaseFlags::default()
            };
        };

        let top_score = ranking.top().normalized_score;
        let gap = top_score - runner_up.normalized_score;

        let tied_top = gap.abs() < TIE_THRESHOLD;
        let close_competition =
            !tied_top && top_score > 0.0 && gap / top_score < CLOSE_COMPETITION_MARGIN;

        EdgeCaseFlags {
            tied_top,
            equal_weights,
            close_competition,
        }
    }

    /// Returns true if all weights are identical. Also used by the
    /// session to decide whether to pause for weight confirmation
    /// before scoring begins.
    pub fn equal_weights(weights: &[Weight]) -> bool {
        match weights.first() {
            Some(first) => weights.iter().all(|w| w == first),
            None => false,
        }
    }
}
