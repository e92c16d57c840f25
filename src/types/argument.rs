use std::fmt;

use super::Relation;

/// One comparison to perform: does `compare` stand in `relation` to `standard`?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argument {
    /// The value under test.
    pub compare: i64,
    pub relation: Relation,
    /// The target value `compare` is measured against.
    pub standard: i64,
}

impl Argument {
    #[must_use]
    pub fn new(compare: i64, relation: Relation, standard: i64) -> Self {
        Self {
            compare,
            relation,
            standard,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.compare, self.relation, self.standard)
    }
}
