use std::fmt;

use super::ConditionError;

/// A boolean result paired with an optional error.
///
/// Returned both by a single comparator call and by a full decision. The two
/// halves are independent: a short-circuited decision forwards whatever error
/// the triggering comparator reported, so `holds` may be `true` while an
/// error is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Outcome {
    holds: bool,
    error: Option<ConditionError>,
}

impl Outcome {
    pub fn new(holds: bool, error: Option<ConditionError>) -> Self {
        Self { holds, error }
    }

    /// An error-free result.
    pub fn of(holds: bool) -> Self {
        Self { holds, error: None }
    }

    /// A failed evaluation: `false` with the error attached.
    pub fn fault(error: ConditionError) -> Self {
        Self {
            holds: false,
            error: Some(error),
        }
    }

    #[must_use]
    pub fn is_true(&self) -> bool {
        self.holds
    }

    #[must_use]
    pub fn error(&self) -> Option<&ConditionError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn into_parts(self) -> (bool, Option<ConditionError>) {
        (self.holds, self.error)
    }

    /// Collapse into a `Result`. An attached error wins over the boolean.
    pub fn into_result(self) -> Result<bool, ConditionError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.holds),
        }
    }
}

impl From<bool> for Outcome {
    fn from(holds: bool) -> Self {
        Outcome::of(holds)
    }
}

impl From<Result<bool, ConditionError>> for Outcome {
    fn from(result: Result<bool, ConditionError>) -> Self {
        match result {
            Ok(holds) => Outcome::of(holds),
            Err(err) => Outcome::fault(err),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(err) => write!(f, "{} ({err})", self.holds),
            None => write!(f, "{}", self.holds),
        }
    }
}
