//! The accumulated dataset for one decision analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, OptionId, Score, ValidationError, Weight};

use super::{Criterion, DecisionDescription, DecisionOption, ScoreMatrix};

/// Everything one analysis needs: description, options, criteria,
/// weights, and the score matrix.
///
/// # Invariants
///
/// - Option and criterion names are unique, case-insensitively,
///   enforced at insertion time
/// - Entities are append-only; ids are entry positions and never change
/// - The description is set once and never replaced
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionDataset {
    description: Option<DecisionDescription>,
    options: Vec<DecisionOption>,
    criteria: Vec<Criterion>,
    scores: ScoreMatrix,
}

impl DecisionDataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the validated decision description.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if a description was already set
    pub fn set_description(
        &mut self,
        description: DecisionDescription,
    ) -> Result<(), ValidationError> {
        if self.description.is_some() {
            return Err(ValidationError::InvalidTransition {
                detail: "decision description is immutable once validated".to_string(),
            });
        }
        self.description = Some(description);
        Ok(())
    }

    /// Appends an option, assigning the next ordinal id.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if the name matches an existing option
    ///   case-insensitively
    pub fn add_option(&mut self, name: impl Into<String>) -> Result<OptionId, ValidationError> {
        let name = name.into();
        if Self::contains_name(self.options.iter().map(|o| o.name.as_str()), &name) {
            return Err(ValidationError::duplicate("option name", name));
        }
        let id = OptionId::new(self.options.len());
        self.options.push(DecisionOption::new(id, name));
        Ok(id)
    }

    /// Appends a criterion (weight unassigned), assigning the next
    /// ordinal id.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if the name matches an existing criterion
    ///   case-insensitively
    pub fn add_criterion(&mut self, name: impl Into<String>) -> Result<CriterionId, ValidationError> {
        let name = name.into();
        if Self::contains_name(self.criteria.iter().map(|c| c.name.as_str()), &name) {
            return Err(ValidationError::duplicate("criterion name", name));
        }
        let id = CriterionId::new(self.criteria.len());
        self.criteria.push(Criterion::new(id, name));
        Ok(id)
    }

    /// Assigns the weight of the criterion at the given entry position.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` if the id is unknown or the weight was
    ///   already assigned
    pub fn assign_weight(&mut self, id: CriterionId, weight: Weight) -> Result<(), ValidationError> {
        let criterion = self.criteria.get_mut(id.index()).ok_or_else(|| {
            ValidationError::InvalidTransition {
                detail: format!("no criterion at {}", id),
            }
        })?;
        if criterion.weight().is_some() {
            return Err(ValidationError::InvalidTransition {
                detail: format!("weight for {} already assigned", criterion.name),
            });
        }
        criterion.assign_weight(weight);
        Ok(())
    }

    /// Records one score cell.
    pub fn record_score(&mut self, option: OptionId, criterion: CriterionId, score: Score) {
        self.scores.record(option, criterion, score);
    }

    /// Returns the decision description, if set.
    pub fn description(&self) -> Option<&DecisionDescription> {
        self.description.as_ref()
    }

    /// Returns the options in entry order.
    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    /// Returns the criteria in entry order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Returns the score matrix.
    pub fn scores(&self) -> &ScoreMatrix {
        &self.scores
    }

    /// Returns the option names in entry order.
    pub fn option_names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.name.as_str()).collect()
    }

    /// Returns the criterion names in entry order.
    pub fn criterion_names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns all weights in entry order, or None while any is
    /// unassigned.
    pub fn weights(&self) -> Option<Vec<Weight>> {
        self.criteria.iter().map(|c| c.weight()).collect()
    }

    /// Returns true if every criterion has a weight.
    pub fn weights_complete(&self) -> bool {
        self.criteria.iter().all(|c| c.weight().is_some())
    }

    /// Returns true if the score matrix covers every pair.
    pub fn scoring_complete(&self) -> bool {
        self.scores.is_complete(&self.options, &self.criteria)
    }

    fn contains_name<'a>(mut existing: impl Iterator<Item = &'a str>, candidate: &str) -> bool {
        existing.any(|name| name.eq_ignore_ascii_case(candidate))
    }
}
