use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::ConditionError;

/// Arithmetic relation between a compared value and a standard value.
///
/// Integer codes follow declaration order, starting at `0` for [`Relation::Equal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Relation {
    Equal = 0,
    NotEqual = 1,
    GreaterThan = 2,
    LessThan = 3,
    GreaterThanOrEqual = 4,
    LessThanOrEqual = 5,
}

impl Relation {
    /// Every declared relation, in code order.
    pub const ALL: [Relation; 6] = [
        Relation::Equal,
        Relation::NotEqual,
        Relation::GreaterThan,
        Relation::LessThan,
        Relation::GreaterThanOrEqual,
        Relation::LessThanOrEqual,
    ];

    /// Whether `value` stands in this relation to `standard`.
    #[must_use]
    pub fn holds(self, standard: i64, value: i64) -> bool {
        let ord = value.cmp(&standard);
        match self {
            Relation::Equal => ord == Ordering::Equal,
            Relation::NotEqual => ord != Ordering::Equal,
            Relation::GreaterThan => ord == Ordering::Greater,
            Relation::LessThan => ord == Ordering::Less,
            Relation::GreaterThanOrEqual => ord != Ordering::Less,
            Relation::LessThanOrEqual => ord != Ordering::Greater,
        }
    }

    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
            Relation::GreaterThan => ">",
            Relation::LessThan => "<",
            Relation::GreaterThanOrEqual => ">=",
            Relation::LessThanOrEqual => "<=",
        }
    }
}

impl TryFrom<u8> for Relation {
    type Error = ConditionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Relation::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| ConditionError::invalid_relation(code))
    }
}

impl TryFrom<i64> for Relation {
    type Error = ConditionError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        u8::try_from(code)
            .map_err(|_| ConditionError::invalid_relation(code))
            .and_then(Relation::try_from)
    }
}

impl FromStr for Relation {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relation::ALL
            .into_iter()
            .find(|rel| rel.symbol() == s)
            .ok_or_else(|| ConditionError::invalid_relation(s))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
