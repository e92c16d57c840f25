use std::convert::Infallible;

use thiserror::Error;

/// Errors produced while comparing values or deciding a condition set.
///
/// Rejected raw inputs are carried as their rendered text so the error stays
/// `Clone` and `Eq` regardless of where the input came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("invalid compare relation '{code}'")]
    InvalidRelation { code: String },

    #[error("comparator set is empty")]
    EmptyComparatorSet,

    #[error("comparator count {comparators} does not match argument count {arguments}")]
    ArityMismatch { comparators: usize, arguments: usize },

    #[error("invalid logic mode '{code}'")]
    InvalidLogicMode { code: String },
}

impl ConditionError {
    pub(crate) fn invalid_relation(code: impl ToString) -> Self {
        ConditionError::InvalidRelation {
            code: code.to_string(),
        }
    }

    pub(crate) fn invalid_logic_mode(code: impl ToString) -> Self {
        ConditionError::InvalidLogicMode {
            code: code.to_string(),
        }
    }
}

// Lets already-typed `Relation` / `LogicMode` values satisfy the
// `TryInto<_>` bounds used by `compare` and `decide`.
impl From<Infallible> for ConditionError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
