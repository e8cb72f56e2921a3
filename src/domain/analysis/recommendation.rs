//! Recommendation composer - structured explanation of a ranking.

use serde::{Deserialize, Serialize};

use crate::domain::decision::DecisionDataset;
use crate::domain::foundation::{ImportanceBand, Score, ScoreBand, Weight};

use super::policy::{MAX_DECISIVE_FACTORS, NEAR_EQUIVALENT_SPREAD, TIE_THRESHOLD};
use super::{
    CriterionContribution, EdgeCaseFlags, Ranking, TEMPLATE_CLOSE_COMPETITION,
    TEMPLATE_EQUAL_WEIGHTS, TEMPLATE_TIED_TOP,
};

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub name: String,
    pub normalized_score: f64,
    pub tied_with_previous: bool,
}

/// The recommended option, or the set of tied leaders.
///
/// A tie is never silently resolved: when the top scores are
/// indistinguishable the report names all leaders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Winner {
    Single {
        name: String,
        normalized_score: f64,
    },
    Tied {
        names: Vec<String>,
        normalized_score: f64,
    },
}

/// Why the winner won, one entry per criterion, ordered by
/// descending weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RationaleEntry {
    pub criterion: String,
    pub weight: Weight,
    pub importance: ImportanceBand,
    pub score: Score,
    pub band: ScoreBand,
    pub contribution: f64,
}

/// A criterion where the winner clearly outperformed the runner-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisiveFactor {
    pub criterion: String,
    /// Winner's contribution minus the runner-up's.
    pub margin: f64,
}

/// Winner versus runner-up. Absent when the top is tied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub runner_up: String,
    /// Gap in normalized score.
    pub margin: f64,
    pub decisive_factors: Vec<DecisiveFactor>,
}

/// A caution raised by an active edge-case flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caution {
    pub template_key: String,
    pub text: String,
}

/// The criterion the user weighted highest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPriority {
    pub criterion: String,
    pub weight: Weight,
}

/// Derived observations about the analysis as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Highest-weighted criterion, first entered on equal weights.
    /// Absent only for a dataset with no weighted criteria.
    pub top_priority: Option<TopPriority>,
    /// Gap between the best and worst normalized scores.
    pub score_spread: f64,
    /// True when the spread is small enough that personal preference
    /// matters more than the numbers.
    pub near_equivalent: bool,
    pub cautions: Vec<Caution>,
}

/// Full per-option contribution table, ranked order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionBreakdown {
    pub rank: usize,
    pub name: String,
    pub total_weighted_score: f64,
    pub normalized_score: f64,
    pub contributions: Vec<CriterionContribution>,
}

/// Structured, language-agnostic explanation of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub decision: String,
    pub option_count: usize,
    pub criterion_count: usize,
    pub ranking: Vec<RankingEntry>,
    pub winner: Winner,
    pub rationale: Vec<RationaleEntry>,
    pub comparison: Option<Comparison>,
    pub insights: Insights,
    pub breakdown: Vec<OptionBreakdown>,
}

/// Turns a ranking plus edge-case flags into a report.
///
/// Performs no validation: it assumes a fully-populated, validated
/// dataset and a completed ranking.
pub struct RecommendationComposer;

impl RecommendationComposer {
    /// Composes the structured report.
    pub fn compose(
        dataset: &DecisionDataset,
        ranking: &Ranking,
        flags: &EdgeCaseFlags,
    ) -> Report {
        let ranking_entries: Vec<RankingEntry> = ranking
            .results()
            .iter()
            .enumerate()
            .map(|(i, r)| RankingEntry {
                rank: i + 1,
                name: r.option_name.clone(),
                normalized_score: r.normalized_score,
                tied_with_previous: ranking.is_tied_with_previous(i),
            })
            .collect();

        let top = ranking.top();
        let winner = if flags.tied_top {
            let leaders = ranking.leaders_within(TIE_THRESHOLD);
            Winner::Tied {
                names: leaders.iter().map(|r| r.option_name.clone()).collect(),
                normalized_score: top.normalized_score,
            }
        } else {
            Winner::Single {
                name: top.option_name.clone(),
                normalized_score: top.normalized_score,
            }
        };

        let mut rationale: Vec<RationaleEntry> = top
            .contributions
            .iter()
            .map(|c| RationaleEntry {
                criterion: c.criterion_name.clone(),
                weight: c.weight,
                importance: c.weight.band(),
                score: c.score,
                band: c.score.band(),
                contribution: c.contribution,
            })
            .collect();
        // Stable: equal weights keep criterion entry order.
        rationale.sort_by(|a, b| b.weight.cmp(&a.weight));

        let comparison = match ranking.runner_up() {
            Some(second) if !flags.tied_top => Some(Comparison {
                runner_up: second.option_name.clone(),
                margin: top.normalized_score - second.normalized_score,
                decisive_factors: Self::decisive_factors(
                    &top.contributions,
                    &second.contributions,
                ),
            }),
            _ => None,
        };

        let insights = Self::insights(dataset, ranking, flags);

        let breakdown = ranking
            .results()
            .iter()
            .enumerate()
            .map(|(i, r)| OptionBreakdown {
                rank: i + 1,
                name: r.option_name.clone(),
                total_weighted_score: r.total_weighted_score,
                normalized_score: r.normalized_score,
                contributions: r.contributions.clone(),
            })
            .collect();

        Report {
            decision: dataset
                .description()
                .map(|d| d.as_str().to_string())
                .unwrap_or_default(),
            option_count: dataset.options().len(),
            criterion_count: dataset.criteria().len(),
            ranking: ranking_entries,
            winner,
            rationale,
            comparison,
            insights,
            breakdown,
        }
    }

    /// Criteria where the winner's contribution beats the runner-up's,
    /// largest margins first.
    fn decisive_factors(
        winner: &[CriterionContribution],
        runner_up: &[CriterionContribution],
    ) -> Vec<DecisiveFactor> {
        let mut factors: Vec<DecisiveFactor> = winner
            .iter()
            .zip(runner_up.iter())
            .filter(|(w, r)| w.contribution > r.contribution)
            .map(|(w, r)| DecisiveFactor {
                criterion: w.criterion_name.clone(),
                margin: w.contribution - r.contribution,
            })
            .collect();
        factors.sort_by(|a, b| {
            b.margin
                .partial_cmp(&a.margin)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        factors.truncate(MAX_DECISIVE_FACTORS);
        factors
    }

    fn insights(dataset: &DecisionDataset, ranking: &Ranking, flags: &EdgeCaseFlags) -> Insights {
        // Strict comparison keeps the first-entered criterion on ties.
        let mut top_priority: Option<TopPriority> = None;
        for criterion in dataset.criteria() {
            let Some(weight) = criterion.weight() else {
                continue;
            };
            let is_new_max = top_priority
                .as_ref()
                .map_or(true, |best| weight > best.weight);
            if is_new_max {
                top_priority = Some(TopPriority {
                    criterion: criterion.name.clone(),
                    weight,
                });
            }
        }

        let scores: Vec<f64> = ranking
            .results()
            .iter()
            .map(|r| r.normalized_score)
            .collect();
        let best = scores.iter().cloned().fold(f64::MIN, f64::max);
        let worst = scores.iter().cloned().fold(f64::MAX, f64::min);
        let score_spread = (best - worst).max(0.0);

        let mut cautions = Vec::new();
        if flags.tied_top {
            cautions.push(Caution {
                template_key: TEMPLATE_TIED_TOP.to_string(),
                text: "The leading options are tied; add criteria, rescore, or adjust \
                       weights to break the tie."
                    .to_string(),
            });
        }
        if flags.equal_weights {
            cautions.push(Caution {
                template_key: TEMPLATE_EQUAL_WEIGHTS.to_string(),
                text: "All criteria carry the same weight; consider whether some factors \
                       genuinely matter more than others."
                    .to_string(),
            });
        }
        if flags.close_competition {
            cautions.push(Caution {
                template_key: TEMPLATE_CLOSE_COMPETITION.to_string(),
                text: "The runner-up is very close behind; weigh non-quantifiable factors \
                       before finalizing."
                    .to_string(),
            });
        }

        Insights {
            top_priority,
            score_spread,
            near_equivalent: score_spread < NEAR_EQUIVALENT_SPREAD,
            cautions,
        }
    }
}
