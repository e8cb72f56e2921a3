//! A dimension of comparison with an assigned importance weight.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{CriterionId, Weight};

/// A named criterion, identified by its entry position.
///
/// The weight is `None` while criterion names are still being
/// collected; weights are assigned in a later pass, in entry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    weight: Option<Weight>,
}

impl Criterion {
    /// Creates a criterion whose weight has not been assigned yet.
    pub fn new(id: CriterionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            weight: None,
        }
    }

    /// Creates a fully-weighted criterion. Mainly useful in tests.
    pub fn with_weight(id: CriterionId, name: impl Into<String>, weight: Weight) -> Self {
        Self {
            id,
            name: name.into(),
            weight: Some(weight),
        }
    }

    /// Returns the assigned weight, if any.
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    /// Assigns the weight. Sequencing (one assignment per criterion)
    /// is enforced by the session stage machine.
    pub(crate) fn assign_weight(&mut self, weight: Weight) {
        self.weight = Some(weight);
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} (weight {})", self.name, w),
            None => write!(f, "{} (unweighted)", self.name),
        }
    }
}
