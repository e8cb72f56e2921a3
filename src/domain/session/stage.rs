//! Conversation stage enum.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The stages of one decision conversation, in collection order.
///
/// The happy path is strictly linear; `WeightConfirmation` is entered
/// only when every weight came out identical, and `Decision` is
/// reachable from anywhere because a restart discards the session's
/// accumulated data and begins again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Collecting the decision description.
    Decision,
    /// Collecting how many options there are.
    NumOptions,
    /// Collecting option names, one per turn.
    OptionNames,
    /// Collecting how many criteria there are.
    NumCriteria,
    /// Collecting criterion names, one per turn.
    CriteriaNames,
    /// Collecting criterion weights, one per turn.
    CriteriaWeights,
    /// Pausing for explicit confirmation of uniform weights.
    WeightConfirmation,
    /// Collecting scores, one option/criterion pair per turn.
    OptionScores,
    /// Report produced; only a restart is meaningful.
    Complete,
}

impl StateMachine for Stage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Stage::*;
        if *target == Decision {
            return true; // restart
        }
        matches!(
            (self, target),
            (Decision, NumOptions)
                | (NumOptions, OptionNames)
                | (OptionNames, NumCriteria)
                | (NumCriteria, CriteriaNames)
                | (CriteriaNames, CriteriaWeights)
                | (CriteriaWeights, WeightConfirmation)
                | (CriteriaWeights, OptionScores)
                | (WeightConfirmation, OptionScores)
                | (OptionScores, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Stage::*;
        let mut targets = match self {
            Decision => vec![NumOptions],
            NumOptions => vec![OptionNames],
            OptionNames => vec![NumCriteria],
            NumCriteria => vec![CriteriaNames],
            CriteriaNames => vec![CriteriaWeights],
            CriteriaWeights => vec![WeightConfirmation, OptionScores],
            WeightConfirmation => vec![OptionScores],
            OptionScores => vec![Complete],
            Complete => vec![],
        };
        targets.push(Decision);
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Stage; 9] = [
        Stage::Decision,
        Stage::NumOptions,
        Stage::OptionNames,
        Stage::NumCriteria,
        Stage::CriteriaNames,
        Stage::CriteriaWeights,
        Stage::WeightConfirmation,
        Stage::OptionScores,
        Stage::Complete,
    ];

    #[test]
    fn happy_path_is_linear() {
        let path = [
            Stage::Decision,
            Stage::NumOptions,
            Stage::OptionNames,
            Stage::NumCriteria,
            Stage::CriteriaNames,
            Stage::CriteriaWeights,
            Stage::OptionScores,
            Stage::Complete,
        ];
        for pair in path.windows(2) {
            assert!(
                pair[0].can_transition_to(&pair[1]),
                "{:?} -> {:?} should be valid",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn weight_confirmation_is_an_optional_detour() {
        assert!(Stage::CriteriaWeights.can_transition_to(&Stage::WeightConfirmation));
        assert!(Stage::WeightConfirmation.can_transition_to(&Stage::OptionScores));
        assert!(!Stage::WeightConfirmation.can_transition_to(&Stage::Complete));
    }

    #[test]
    fn skipping_ahead_is_invalid() {
        assert!(!Stage::Decision.can_transition_to(&Stage::OptionScores));
        assert!(!Stage::NumOptions.can_transition_to(&Stage::CriteriaNames));
        assert!(Stage::Decision.transition_to(Stage::Complete).is_err());
    }

    #[test]
    fn restart_is_valid_from_every_stage() {
        for stage in ALL {
            assert!(stage.can_transition_to(&Stage::Decision));
            assert!(stage.valid_transitions().contains(&Stage::Decision));
        }
    }

    #[test]
    fn no_stage_is_terminal_because_restart_exists() {
        for stage in ALL {
            assert!(!stage.is_terminal());
        }
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for stage in ALL {
            for target in stage.valid_transitions() {
                assert!(stage.can_transition_to(&target));
            }
        }
    }
}
