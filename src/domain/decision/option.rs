//! One alternative among which the user is choosing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::OptionId;

/// A named option, identified by its entry position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: OptionId,
    pub name: String,
}

impl DecisionOption {
    /// Creates an option at the given entry position.
    pub fn new(id: OptionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for DecisionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_id_and_name() {
        let opt = DecisionOption::new(OptionId::new(0), "Google internship");
        assert_eq!(opt.id.index(), 0);
        assert_eq!(opt.name, "Google internship");
        assert_eq!(format!("{}", opt), "Google internship");
    }
}
