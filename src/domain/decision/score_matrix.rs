//! Score matrix - dense (option x criterion) grid of 1-10 scores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, OptionId, Score};

use super::{Criterion, DecisionOption};

/// Mapping from (option, criterion) to a score.
///
/// The matrix must be fully dense before scoring: there is no default
/// or missing value, and the scoring engine rejects sparse matrices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMatrix {
    /// Cell data keyed by "option_index:criterion_index".
    cells: HashMap<String, Score>,
}

impl ScoreMatrix {
    /// Creates an empty score matrix.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a matrix, mainly for tests.
    pub fn builder() -> ScoreMatrixBuilder {
        ScoreMatrixBuilder::default()
    }

    /// Records the score for one (option, criterion) pair.
    pub fn record(&mut self, option: OptionId, criterion: CriterionId, score: Score) {
        self.cells.insert(Self::cell_key(option, criterion), score);
    }

    /// Returns the score for a pair, if recorded.
    pub fn get(&self, option: OptionId, criterion: CriterionId) -> Option<Score> {
        self.cells.get(&Self::cell_key(option, criterion)).copied()
    }

    /// Returns the number of recorded cells.
    pub fn filled_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell has been recorded.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if every (option, criterion) pair has a score.
    pub fn is_complete(&self, options: &[DecisionOption], criteria: &[Criterion]) -> bool {
        self.missing_pairs(options, criteria).is_empty()
    }

    /// Lists the pairs still missing a score, in option-major order.
    pub fn missing_pairs(
        &self,
        options: &[DecisionOption],
        criteria: &[Criterion],
    ) -> Vec<(OptionId, CriterionId)> {
        let mut missing = Vec::new();
        for option in options {
            for criterion in criteria {
                if self.get(option.id, criterion.id).is_none() {
                    missing.push((option.id, criterion.id));
                }
            }
        }
        missing
    }

    fn cell_key(option: OptionId, criterion: CriterionId) -> String {
        format!("{}:{}", option.index(), criterion.index())
    }
}

/// Builder for constructing ScoreMatrix instances.
#[derive(Debug, Default)]
pub struct ScoreMatrixBuilder {
    cells: HashMap<String, Score>,
}

impl ScoreMatrixBuilder {
    /// Adds a score cell by raw indices.
    pub fn score(mut self, option: usize, criterion: usize, score: Score) -> Self {
        self.cells.insert(
            ScoreMatrix::cell_key(OptionId::new(option), CriterionId::new(criterion)),
            score,
        );
        self
    }

    /// Builds the score matrix.
    pub fn build(self) -> ScoreMatrix {
        ScoreMatrix { cells: self.cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<DecisionOption> {
        (0..n)
            .map(|i| DecisionOption::new(OptionId::new(i), format!("Option {}", i + 1)))
            .collect()
    }

    fn criteria(n: usize) -> Vec<Criterion> {
        (0..n)
            .map(|i| Criterion::new(CriterionId::new(i), format!("Criterion {}", i + 1)))
            .collect()
    }

    fn s(value: u8) -> Score {
        Score::try_new(value).unwrap()
    }

    #[test]
    fn empty_matrix_has_no_cells() {
        let matrix = ScoreMatrix::empty();
        assert!(matrix.is_empty());
        assert_eq!(matrix.filled_count(), 0);
    }

    #[test]
    fn record_and_get_round_trip() {
        let mut matrix = ScoreMatrix::empty();
        matrix.record(
            OptionId::new(0),
            CriterionId::new(1),
            Score::try_new(7).unwrap(),
        );

        assert_eq!(
            matrix
                .get(OptionId::new(0), CriterionId::new(1))
                .map(|s| s.value()),
            Some(7)
        );
        assert!(matrix.get(OptionId::new(1), CriterionId::new(0)).is_none());
    }

    #[test]
    fn missing_pairs_lists_unfilled_cells_in_order() {
        let matrix = ScoreMatrix::builder().score(0, 0, s(5)).build();
        let missing = matrix.missing_pairs(&options(2), &criteria(2));

        assert_eq!(
            missing,
            vec![
                (OptionId::new(0), CriterionId::new(1)),
                (OptionId::new(1), CriterionId::new(0)),
                (OptionId::new(1), CriterionId::new(1)),
            ]
        );
    }

    #[test]
    fn is_complete_requires_every_pair() {
        let partial = ScoreMatrix::builder()
            .score(0, 0, s(5))
            .score(0, 1, s(6))
            .score(1, 0, s(7))
            .build();
        assert!(!partial.is_complete(&options(2), &criteria(2)));

        let full = ScoreMatrixBuilder::default()
            .score(0, 0, s(5))
            .score(0, 1, s(6))
            .score(1, 0, s(7))
            .score(1, 1, s(8))
            .build();
        assert!(full.is_complete(&options(2), &criteria(2)));
    }

    #[test]
    fn serializes_to_json_with_string_keys() {
        let matrix = ScoreMatrix::builder().score(0, 1, s(9)).build();
        let json = serde_json::to_string(&matrix).unwrap();
        assert!(json.contains("\"0:1\":9"));

        let back: ScoreMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);
    }
}
