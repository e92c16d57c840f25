use std::fmt;

use super::{LogicMode, Outcome};

/// Detailed decision report returned by
/// [`Evaluator::decide_detailed()`](super::event::Evaluator::decide_detailed).
///
/// Records the outcome together with how far evaluation got: how many
/// comparators ran and which one, if any, settled the decision early.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct DecisionReport {
    outcome: Outcome,
    mode: Option<LogicMode>,
    evaluated: usize,
    trigger: Option<usize>,
}

impl DecisionReport {
    pub(crate) fn new(
        outcome: Outcome,
        mode: Option<LogicMode>,
        evaluated: usize,
        trigger: Option<usize>,
    ) -> Self {
        Self {
            outcome,
            mode,
            evaluated,
            trigger,
        }
    }

    /// A decision rejected before any comparator ran.
    pub(crate) fn rejected(outcome: Outcome) -> Self {
        Self::new(outcome, None, 0, None)
    }

    /// The decision, same as [`Evaluator::decide()`](super::event::Evaluator::decide).
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn into_outcome(self) -> Outcome {
        self.outcome
    }

    /// The resolved logic mode. `None` when the call was rejected first.
    #[must_use]
    pub fn mode(&self) -> Option<LogicMode> {
        self.mode
    }

    /// Number of comparators invoked.
    #[must_use]
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Index of the comparator that short-circuited evaluation.
    #[must_use]
    pub fn trigger(&self) -> Option<usize> {
        self.trigger
    }
}

impl fmt::Display for DecisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decision: {}", self.outcome)?;
        match self.mode {
            Some(mode) => write!(f, ", mode: {mode}")?,
            None => write!(f, ", mode: none")?,
        }
        write!(f, ", evaluated: {}", self.evaluated)?;
        if let Some(idx) = self.trigger {
            write!(f, ", stopped at: {idx}")?;
        }
        Ok(())
    }
}
