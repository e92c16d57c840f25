use std::fmt;

use log::debug;

use super::{Argument, ConditionError, DecisionReport, LogicMode, Outcome};
use crate::{evaluate, Comparator};

/// An identity-bearing unit that decides whether its condition set holds.
///
/// Implementors supply [`id`](Evaluator::id) and [`kind`](Evaluator::kind);
/// the decision methods are provided and may be overridden by variants that
/// need different combination rules.
pub trait Evaluator {
    fn id(&self) -> i64;

    fn kind(&self) -> i64;

    /// Run `comparators[k]` against `arguments[k]` in order and combine the
    /// results under `mode`.
    ///
    /// `mode` may be a [`LogicMode`] or a raw mode code. Fails with
    /// [`ConditionError::EmptyComparatorSet`], [`ConditionError::ArityMismatch`]
    /// or [`ConditionError::InvalidLogicMode`], checked in that order, before
    /// any comparator runs. When evaluation stops early, the error reported by
    /// the comparator that stopped it is returned alongside the decision.
    fn decide<M>(
        &self,
        comparators: &[&dyn Comparator],
        arguments: &[Argument],
        mode: M,
    ) -> Outcome
    where
        M: TryInto<LogicMode>,
        ConditionError: From<<M as TryInto<LogicMode>>::Error>,
    {
        self.decide_detailed(comparators, arguments, mode)
            .into_outcome()
    }

    /// Like [`decide`](Evaluator::decide), but also reports how far
    /// evaluation got.
    fn decide_detailed<M>(
        &self,
        comparators: &[&dyn Comparator],
        arguments: &[Argument],
        mode: M,
    ) -> DecisionReport
    where
        M: TryInto<LogicMode>,
        ConditionError: From<<M as TryInto<LogicMode>>::Error>,
    {
        let report = evaluate::decide(comparators, arguments, mode);
        debug!("event {} (kind {}): {report}", self.id(), self.kind());
        report
    }
}

/// The stock [`Evaluator`]: an immutable id and type tag.
///
/// Holds no mutable state, so one instance can be shared across threads and
/// reused for any number of decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    id: i64,
    kind: i64,
}

impl Event {
    #[must_use]
    pub fn new(id: i64, kind: i64) -> Self {
        Self { id, kind }
    }
}

impl Evaluator for Event {
    fn id(&self) -> i64 {
        self.id
    }

    fn kind(&self) -> i64 {
        self.kind
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event {} (kind {})", self.id, self.kind)
    }
}
