use std::fmt;
use std::str::FromStr;

use super::ConditionError;

/// How per-argument comparison results combine into one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LogicMode {
    /// Every comparison must hold.
    And = 0,
    /// At least one comparison must hold.
    Or = 1,
    /// No comparison may hold.
    Not = 2,
}

impl LogicMode {
    pub const ALL: [LogicMode; 3] = [LogicMode::And, LogicMode::Or, LogicMode::Not];

    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for LogicMode {
    type Error = ConditionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        LogicMode::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| ConditionError::invalid_logic_mode(code))
    }
}

impl TryFrom<i64> for LogicMode {
    type Error = ConditionError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        u8::try_from(code)
            .map_err(|_| ConditionError::invalid_logic_mode(code))
            .and_then(LogicMode::try_from)
    }
}

impl FromStr for LogicMode {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("and") {
            Ok(LogicMode::And)
        } else if s.eq_ignore_ascii_case("or") {
            Ok(LogicMode::Or)
        } else if s.eq_ignore_ascii_case("not") {
            Ok(LogicMode::Not)
        } else {
            Err(ConditionError::invalid_logic_mode(s))
        }
    }
}

impl fmt::Display for LogicMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicMode::And => write!(f, "AND"),
            LogicMode::Or => write!(f, "OR"),
            LogicMode::Not => write!(f, "NOT"),
        }
    }
}
