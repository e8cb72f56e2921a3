//! Scoring engine - weighted totals, normalization, stable ranking.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, error};

use crate::domain::decision::DecisionDataset;
use crate::domain::foundation::{CriterionId, OptionId, Score, ScoringError, Weight};

use super::policy::SCORE_EQUALITY_EPSILON;

/// One criterion's contribution to an option's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionContribution {
    pub criterion_id: CriterionId,
    pub criterion_name: String,
    pub weight: Weight,
    pub score: Score,
    /// score x weight.
    pub contribution: f64,
}

/// Derived result for one option.
///
/// The sum of `contributions` equals `total_weighted_score` (within
/// floating tolerance); `normalized_score` is the total divided by
/// the weight sum, on a 0-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedResult {
    pub option_id: OptionId,
    pub option_name: String,
    pub total_weighted_score: f64,
    pub normalized_score: f64,
    /// Per-criterion contributions in criterion entry order.
    pub contributions: Vec<CriterionContribution>,
}

/// Results ordered by descending normalized score.
///
/// Equal scores (within [`SCORE_EQUALITY_EPSILON`]) keep their option
/// entry order and are tagged as tied; ties are never broken by any
/// hidden rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    results: Vec<WeightedResult>,
    tied_with_previous: Vec<bool>,
}

impl Ranking {
    fn new(results: Vec<WeightedResult>) -> Self {
        let tied_with_previous = results
            .iter()
            .enumerate()
            .map(|(i, r)| {
                i > 0
                    && (results[i - 1].normalized_score - r.normalized_score).abs()
                        < SCORE_EQUALITY_EPSILON
            })
            .collect();
        Self {
            results,
            tied_with_previous,
        }
    }

    /// Returns the ranked results, best first.
    pub fn results(&self) -> &[WeightedResult] {
        &self.results
    }

    /// Returns the number of ranked options.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the ranking holds no results. Never the case
    /// for rankings produced by the scoring engine.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the top-ranked result.
    ///
    /// The engine only constructs non-empty rankings, so index 0
    /// always exists.
    pub fn top(&self) -> &WeightedResult {
        &self.results[0]
    }

    /// Returns the second-ranked result, if any.
    pub fn runner_up(&self) -> Option<&WeightedResult> {
        self.results.get(1)
    }

    /// Returns true if the result at `index` has the same normalized
    /// score as the one ranked directly above it.
    pub fn is_tied_with_previous(&self, index: usize) -> bool {
        self.tied_with_previous.get(index).copied().unwrap_or(false)
    }

    /// Returns every result whose normalized score is within
    /// `tolerance` of the top score.
    pub fn leaders_within(&self, tolerance: f64) -> Vec<&WeightedResult> {
        let top_score = self.top().normalized_score;
        self.results
            .iter()
            .take_while(|r| (top_score - r.normalized_score).abs() < tolerance)
            .collect()
    }
}

/// Weighted-scoring computation over a completed dataset.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes the ranking for a completed dataset.
    ///
    /// # Algorithm
    ///
    /// For each option: contribution(criterion) = score x weight;
    /// total = sum of contributions; normalized = total / sum of
    /// weights. The weight sum is at least 2 by construction (two or
    /// more criteria, each weighted at least 1), so the division is
    /// always defined.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` when options or criteria are empty
    /// - `IncompleteData` when any weight or score cell is missing;
    ///   this is a sequencing bug in the driver, logged as an error
    pub fn compute_results(dataset: &DecisionDataset) -> Result<Ranking, ScoringError> {
        let options = dataset.options();
        let criteria = dataset.criteria();

        if options.is_empty() {
            return Err(ScoringError::empty_input("options"));
        }
        if criteria.is_empty() {
            return Err(ScoringError::empty_input("criteria"));
        }

        let mut missing: Vec<String> = criteria
            .iter()
            .filter(|c| c.weight().is_none())
            .map(|c| format!("weight for criterion '{}'", c.name))
            .collect();
        missing.extend(
            dataset
                .scores()
                .missing_pairs(options, criteria)
                .into_iter()
                .map(|(opt, crit)| {
                    format!(
                        "score for option '{}' x criterion '{}'",
                        options[opt.index()].name,
                        criteria[crit.index()].name
                    )
                }),
        );
        if !missing.is_empty() {
            error!(
                missing = missing.len(),
                "scoring invoked before the dataset was complete"
            );
            return Err(ScoringError::incomplete(missing));
        }

        debug!(
            options = options.len(),
            criteria = criteria.len(),
            "computing weighted results"
        );

        let weight_sum: f64 = criteria
            .iter()
            .filter_map(|c| c.weight())
            .map(|w| w.value() as f64)
            .sum();

        let mut results: Vec<WeightedResult> = Vec::with_capacity(options.len());
        for option in options {
            let mut contributions = Vec::with_capacity(criteria.len());
            let mut total = 0.0;

            for criterion in criteria {
                // Completeness was checked above; skip defensively
                // rather than panic if an entry is somehow absent.
                let (Some(weight), Some(score)) = (
                    criterion.weight(),
                    dataset.scores().get(option.id, criterion.id),
                ) else {
                    continue;
                };

                let contribution = score.value() as f64 * weight.value() as f64;
                total += contribution;
                contributions.push(CriterionContribution {
                    criterion_id: criterion.id,
                    criterion_name: criterion.name.clone(),
                    weight,
                    score,
                    contribution,
                });
            }

            results.push(WeightedResult {
                option_id: option.id,
                option_name: option.name.clone(),
                total_weighted_score: total,
                normalized_score: total / weight_sum,
                contributions,
            });
        }

        // Stable sort: entries equal within epsilon keep entry order.
        results.sort_by(|a, b| {
            if (a.normalized_score - b.normalized_score).abs() < SCORE_EQUALITY_EPSILON {
                Ordering::Equal
            } else {
                b.normalized_score
                    .partial_cmp(&a.normalized_score)
                    .unwrap_or(Ordering::Equal)
            }
        });

        Ok(Ranking::new(results))
    }
}
