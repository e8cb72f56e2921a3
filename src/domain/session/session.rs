//! The per-conversation session record and turn transition function.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::analysis::{EdgeCaseDetector, RecommendationComposer, Report, ScoringEngine};
use crate::domain::decision::DecisionDataset;
use crate::domain::foundation::{
    CriterionId, OptionId, Score, SessionId, StateMachine, Timestamp, ValidationError, Weight,
};
use crate::domain::validation::{
    validate_count, validate_decision_description, validate_name, validate_scale, COUNT_MAX,
    COUNT_MIN,
};

use super::{SessionError, Stage};

/// The word that accepts the equal-weights confirmation pause.
const WEIGHT_CONFIRMATION_WORD: &str = "continue";

/// What the driver should ask the user next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Prompt {
    DecisionDescription,
    OptionCount,
    OptionName {
        position: u8,
        total: u8,
    },
    CriterionCount,
    CriterionName {
        position: u8,
        total: u8,
    },
    CriterionWeight {
        criterion: String,
        position: u8,
        total: u8,
    },
    /// All weights came out identical; ask the user to type
    /// "continue" or revise via restart.
    WeightConfirmation,
    OptionScore {
        option: String,
        criterion: String,
        /// Share of the score matrix already filled, 0-100.
        progress_percent: u8,
    },
}

/// Result of one accepted user turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// More input is needed; show this prompt.
    Continue { prompt: Prompt },
    /// The dataset is complete and the analysis ran.
    Complete { report: Box<Report> },
}

/// One conversation's accumulated state, owned by the external driver
/// and passed in by `&mut`.
///
/// # Invariants
///
/// - `stage` only changes through validated transitions
/// - A rejected input never mutates the dataset or the stage
/// - Weights are collected in criterion entry order; scores in
///   option-major order over the declared grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionSession {
    id: SessionId,
    started_at: Timestamp,
    stage: Stage,
    dataset: DecisionDataset,
    declared_options: Option<u8>,
    declared_criteria: Option<u8>,
    weight_cursor: usize,
    score_cursor: usize,
}

impl DecisionSession {
    /// Creates a fresh session at the decision stage.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            started_at: Timestamp::now(),
            stage: Stage::Decision,
            dataset: DecisionDataset::new(),
            declared_options: None,
            declared_criteria: None,
            weight_cursor: 0,
            score_cursor: 0,
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns when the current analysis began.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns the current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the accumulated dataset.
    pub fn dataset(&self) -> &DecisionDataset {
        &self.dataset
    }

    /// Returns the prompt for the current stage, or None once the
    /// report has been produced. The driver uses this for the opening
    /// prompt of a fresh or restarted session.
    pub fn current_prompt(&self) -> Option<Prompt> {
        match self.stage {
            Stage::Decision => Some(Prompt::DecisionDescription),
            Stage::NumOptions => Some(Prompt::OptionCount),
            Stage::OptionNames => Some(self.option_name_prompt()),
            Stage::NumCriteria => Some(Prompt::CriterionCount),
            Stage::CriteriaNames => Some(self.criterion_name_prompt()),
            Stage::CriteriaWeights => Some(self.weight_prompt()),
            Stage::WeightConfirmation => Some(Prompt::WeightConfirmation),
            Stage::OptionScores => Some(self.score_prompt()),
            Stage::Complete => None,
        }
    }

    /// Discards all accumulated data and begins a new analysis under
    /// the same session identity.
    pub fn restart(&mut self) -> Prompt {
        debug!(session = %self.id, from = ?self.stage, "session restarted");
        self.started_at = Timestamp::now();
        self.stage = Stage::Decision;
        self.dataset = DecisionDataset::new();
        self.declared_options = None;
        self.declared_criteria = None;
        self.weight_cursor = 0;
        self.score_cursor = 0;
        Prompt::DecisionDescription
    }

    /// Processes one user turn: validates the text for the current
    /// stage, appends it to the dataset, and advances.
    ///
    /// # Errors
    ///
    /// - `Validation` when the input is rejected; the stage is
    ///   unchanged and the driver re-prompts with the guidance text
    /// - `Scoring` if the engine receives an incomplete dataset, which
    ///   indicates a sequencing bug
    /// - `AnalysisComplete` for any input after the report
    pub fn apply_input(&mut self, text: &str) -> Result<TurnOutcome, SessionError> {
        match self.stage {
            Stage::Decision => self.accept_decision(text),
            Stage::NumOptions => self.accept_option_count(text),
            Stage::OptionNames => self.accept_option_name(text),
            Stage::NumCriteria => self.accept_criterion_count(text),
            Stage::CriteriaNames => self.accept_criterion_name(text),
            Stage::CriteriaWeights => self.accept_weight(text),
            Stage::WeightConfirmation => self.accept_confirmation(text),
            Stage::OptionScores => self.accept_score(text),
            Stage::Complete => Err(SessionError::AnalysisComplete),
        }
    }

    // ── Per-stage handlers ──────────────────────────────────────────

    fn accept_decision(&mut self, text: &str) -> Result<TurnOutcome, SessionError> {
        let description = validate_decision_description(text)?;
        self.dataset.set_description(description)?;
        self.advance(Stage::NumOptions)?;
        Ok(TurnOutcome::Continue {
            prompt: Prompt::OptionCount,
        })
    }

    fn accept_option_count(&mut self, text: &str) -> Result<TurnOutcome, SessionError> {
        let count = validate_count(text, COUNT_MIN, COUNT_MAX)?;
        self.declared_options = Some(count);
        self.advance(Stage::OptionNames)?;
        Ok(TurnOutcome::Continue {
            prompt: self.option_name_prompt(),
        })
    }

    fn accept_option_name(&mut self, text: &str) -> Result<TurnOutcome, SessionError> {
        let name = {
            let existing = self.dataset.option_names();
            validate_name(text, "option name", &existing)?
        };
        self.dataset.add_option(name)?;

        if self.dataset.options().len() < usize::from(self.declared_options.unwrap_or(0)) {
            return Ok(TurnOutcome::Continue {
                prompt: self.option_name_prompt(),
            });
        }
        self.advance(Stage::NumCriteria)?;
        Ok(TurnOutcome::Continue {
            prompt: Prompt::CriterionCount,
        })
    }

    fn accept_criterion_count(&mut self, text: &str) -> Result<TurnOutcome, SessionError> {
        let count = validate_count(text, COUNT_MIN, COUNT_MAX)?;
        self.declared_criteria = Some(count);
        self.advance(Stage::CriteriaNames)?;
        Ok(TurnOutcome::Continue {
            prompt: self.criterion_name_prompt(),
        })
    }

    fn accept_criterion_name(&mut self, text: &str) -> Result<TurnOutcome, SessionError> {
        let name = {
            let existing = self.dataset.criterion_names();
            validate_name(text, "criterion name", &existing)?
        };
        self.dataset.add_criterion(name)?;

        if self.dataset.criteria().len() < usize::from(self.declared_criteria.unwrap_or(0)) {
            return Ok(TurnOutcome::Continue {
                prompt: self.criterion_name_prompt(),
            });
        }
        self.advance(Stage::CriteriaWeights)?;
        Ok(TurnOutcome::Continue {
            prompt: self.weight_prompt(),
        })
    }

    fn accept_weight(&mut self, text: &str) -> Result<TurnOutcome, SessionError> {
        let value = validate_scale(text, "weight")?;
        let weight = Weight::try_new(value)?;
        self.dataset
            .assign_weight(CriterionId::new(self.weight_cursor), weight)?;
        self.weight_cursor += 1;

        if !self.dataset.weights_complete() {
            return Ok(TurnOutcome::Continue {
                prompt: self.weight_prompt(),
            });
        }

        let weights = self.dataset.weights().unwrap_or_default();
        if EdgeCaseDetector::equal_weights(&weights) {
            self.advance(Stage::WeightConfirmation)?;
            return Ok(TurnOutcome::Continue {
                prompt: Prompt::WeightConfirmation,
            });
        }
        self.advance(Stage::OptionScores)?;
        Ok(TurnOutcome::Continue {
            prompt: self.score_prompt(),
        })
    }

    fn accept_confirmation(&mut self, text: &str) -> Result<TurnOutcome, SessionError> {
        if !text.trim().eq_ignore_ascii_case(WEIGHT_CONFIRMATION_WORD) {
            return Err(ValidationError::NotConfirmed.into());
        }
        self.advance(Stage::OptionScores)?;
        Ok(TurnOutcome::Continue {
            prompt: self.score_prompt(),
        })
    }

    fn accept_score(&mut self, text: &str) -> Result<TurnOutcome, SessionError> {
        let value = validate_scale(text, "score")?;
        let score = Score::try_new(value)?;
        let (option, criterion) = self.score_cell();
        self.dataset.record_score(option, criterion, score);
        self.score_cursor += 1;

        if !self.dataset.scoring_complete() {
            return Ok(TurnOutcome::Continue {
                prompt: self.score_prompt(),
            });
        }
        self.finish()
    }

    /// Runs the analysis pipeline over the completed dataset.
    fn finish(&mut self) -> Result<TurnOutcome, SessionError> {
        let ranking = ScoringEngine::compute_results(&self.dataset)?;
        let weights = self.dataset.weights().unwrap_or_default();
        let flags = EdgeCaseDetector::detect(&ranking, &weights);
        let report = RecommendationComposer::compose(&self.dataset, &ranking, &flags);
        self.advance(Stage::Complete)?;
        Ok(TurnOutcome::Complete {
            report: Box::new(report),
        })
    }

    // ── Prompt construction ─────────────────────────────────────────

    fn option_name_prompt(&self) -> Prompt {
        Prompt::OptionName {
            position: self.dataset.options().len() as u8 + 1,
            total: self.declared_options.unwrap_or(0),
        }
    }

    fn criterion_name_prompt(&self) -> Prompt {
        Prompt::CriterionName {
            position: self.dataset.criteria().len() as u8 + 1,
            total: self.declared_criteria.unwrap_or(0),
        }
    }

    fn weight_prompt(&self) -> Prompt {
        let criterion = self
            .dataset
            .criteria()
            .get(self.weight_cursor)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        Prompt::CriterionWeight {
            criterion,
            position: self.weight_cursor as u8 + 1,
            total: self.declared_criteria.unwrap_or(0),
        }
    }

    fn score_prompt(&self) -> Prompt {
        let (option_id, criterion_id) = self.score_cell();
        let option = self
            .dataset
            .options()
            .get(option_id.index())
            .map(|o| o.name.clone())
            .unwrap_or_default();
        let criterion = self
            .dataset
            .criteria()
            .get(criterion_id.index())
            .map(|c| c.name.clone())
            .unwrap_or_default();

        let total = self.dataset.options().len() * self.dataset.criteria().len();
        let progress_percent = if total == 0 {
            0
        } else {
            (self.score_cursor * 100 / total) as u8
        };
        Prompt::OptionScore {
            option,
            criterion,
            progress_percent,
        }
    }

    /// The next score cell in option-major order.
    fn score_cell(&self) -> (OptionId, CriterionId) {
        let criteria = self.dataset.criteria().len().max(1);
        (
            OptionId::new(self.score_cursor / criteria),
            CriterionId::new(self.score_cursor % criteria),
        )
    }

    fn advance(&mut self, target: Stage) -> Result<(), ValidationError> {
        let next = self.stage.transition_to(target)?;
        debug!(session = %self.id, from = ?self.stage, to = ?next, "stage transition");
        self.stage = next;
        Ok(())
    }
}

impl Default for DecisionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Winner;

    const DECISION: &str = "Choosing between two job offers for long-term career growth";

    fn accept(session: &mut DecisionSession, text: &str) -> TurnOutcome {
        session
            .apply_input(text)
            .unwrap_or_else(|err| panic!("input {:?} rejected: {}", text, err))
    }

    /// Walks a session up to the scoring stage with distinct weights.
    fn session_at_scoring() -> DecisionSession {
        let mut session = DecisionSession::new();
        accept(&mut session, DECISION);
        accept(&mut session, "2");
        accept(&mut session, "Startup offer");
        accept(&mut session, "Corporate offer");
        accept(&mut session, "2");
        accept(&mut session, "Salary");
        accept(&mut session, "Growth");
        accept(&mut session, "9");
        accept(&mut session, "1");
        assert_eq!(session.stage(), Stage::OptionScores);
        session
    }

    #[test]
    fn new_session_prompts_for_decision() {
        let session = DecisionSession::new();
        assert_eq!(session.stage(), Stage::Decision);
        assert_eq!(session.current_prompt(), Some(Prompt::DecisionDescription));
    }

    #[test]
    fn full_walkthrough_produces_decisive_report() {
        let mut session = session_at_scoring();
        // Startup: 9,1  Corporate: 1,9 with weights 9,1.
        for score in ["9", "1", "1"] {
            let outcome = accept(&mut session, score);
            assert!(matches!(outcome, TurnOutcome::Continue { .. }));
        }
        let outcome = accept(&mut session, "9");
        let TurnOutcome::Complete { report } = outcome else {
            panic!("expected completion, got {:?}", outcome);
        };

        assert_eq!(session.stage(), Stage::Complete);
        match &report.winner {
            Winner::Single { name, normalized_score } => {
                assert_eq!(name, "Startup offer");
                assert!((normalized_score - 8.2).abs() < 1e-9);
            }
            other => panic!("expected single winner, got {:?}", other),
        }
        assert_eq!(report.decision, DECISION);
    }

    #[test]
    fn rejected_input_leaves_stage_and_dataset_unchanged() {
        let mut session = DecisionSession::new();
        let err = session.apply_input("hi").unwrap_err();
        assert!(err.is_user_correctable());
        assert_eq!(session.stage(), Stage::Decision);
        assert!(session.dataset().description().is_none());

        accept(&mut session, DECISION);
        let err = session.apply_input("11").unwrap_err();
        assert!(err.is_user_correctable());
        assert_eq!(session.stage(), Stage::NumOptions);
    }

    #[test]
    fn duplicate_option_name_is_rejected_and_reprompted() {
        let mut session = DecisionSession::new();
        accept(&mut session, DECISION);
        accept(&mut session, "2");
        accept(&mut session, "Alpha");

        assert!(session.apply_input("alpha").is_err());
        assert_eq!(session.stage(), Stage::OptionNames);
        assert_eq!(session.dataset().options().len(), 1);

        accept(&mut session, "Beta");
        assert_eq!(session.stage(), Stage::NumCriteria);
    }

    #[test]
    fn equal_weights_pause_requires_continue() {
        let mut session = DecisionSession::new();
        accept(&mut session, DECISION);
        accept(&mut session, "2");
        accept(&mut session, "Alpha");
        accept(&mut session, "Beta");
        accept(&mut session, "2");
        accept(&mut session, "Cost");
        accept(&mut session, "Fit");
        accept(&mut session, "5");
        let outcome = accept(&mut session, "5");
        assert!(matches!(
            outcome,
            TurnOutcome::Continue {
                prompt: Prompt::WeightConfirmation
            }
        ));
        assert_eq!(session.stage(), Stage::WeightConfirmation);

        let err = session.apply_input("yes please").unwrap_err();
        assert!(err.is_user_correctable());
        assert_eq!(session.stage(), Stage::WeightConfirmation);

        let outcome = accept(&mut session, "  CONTINUE  ");
        assert!(matches!(
            outcome,
            TurnOutcome::Continue {
                prompt: Prompt::OptionScore { .. }
            }
        ));
        assert_eq!(session.stage(), Stage::OptionScores);
    }

    #[test]
    fn distinct_weights_skip_the_confirmation_pause() {
        let session = session_at_scoring();
        assert_eq!(session.stage(), Stage::OptionScores);
    }

    #[test]
    fn score_prompts_walk_the_grid_option_major() {
        let mut session = session_at_scoring();
        let Some(Prompt::OptionScore { option, criterion, .. }) = session.current_prompt() else {
            panic!("expected score prompt");
        };
        assert_eq!(option, "Startup offer");
        assert_eq!(criterion, "Salary");

        let outcome = accept(&mut session, "7");
        let TurnOutcome::Continue {
            prompt: Prompt::OptionScore { option, criterion, .. },
        } = outcome
        else {
            panic!("expected another score prompt");
        };
        assert_eq!(option, "Startup offer");
        assert_eq!(criterion, "Growth");
    }

    #[test]
    fn progress_percent_is_monotonic_across_scoring() {
        let mut session = session_at_scoring();
        let mut last = None;
        for score in ["5", "6", "7"] {
            let outcome = accept(&mut session, score);
            let TurnOutcome::Continue {
                prompt: Prompt::OptionScore { progress_percent, .. },
            } = outcome
            else {
                panic!("expected score prompt");
            };
            if let Some(previous) = last {
                assert!(progress_percent > previous);
            }
            last = Some(progress_percent);
        }
        assert_eq!(last, Some(75));
    }

    #[test]
    fn input_after_completion_is_rejected() {
        let mut session = session_at_scoring();
        for score in ["9", "1", "1"] {
            accept(&mut session, score);
        }
        accept(&mut session, "9");

        let err = session.apply_input("5").unwrap_err();
        assert_eq!(err, SessionError::AnalysisComplete);
        assert!(session.current_prompt().is_none());
    }

    #[test]
    fn restart_discards_everything_but_identity() {
        let mut session = session_at_scoring();
        let id = *session.id();

        let prompt = session.restart();
        assert_eq!(prompt, Prompt::DecisionDescription);
        assert_eq!(session.stage(), Stage::Decision);
        assert_eq!(session.id(), &id);
        assert!(session.dataset().description().is_none());
        assert!(session.dataset().options().is_empty());
        assert!(session.dataset().criteria().is_empty());

        // The fresh dataset accepts a new, different decision.
        accept(&mut session, "Deciding which city to relocate to next year");
        assert_eq!(session.stage(), Stage::NumOptions);
    }

    #[test]
    fn gibberish_names_are_rejected() {
        let mut session = DecisionSession::new();
        accept(&mut session, DECISION);
        accept(&mut session, "2");
        assert!(session.apply_input("kfhkjfk").is_err());
        assert_eq!(session.dataset().options().len(), 0);
    }
}
