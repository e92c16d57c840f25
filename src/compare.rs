use std::fmt;

use crate::{ConditionError, Outcome, Relation};

/// A comparison capability invoked once per [`Argument`](crate::Argument).
///
/// [`Numeric`] is the stock implementation. Closures become comparators via
/// [`from_fn`], and references and boxes of comparators are comparators too,
/// so `&dyn Comparator` and `Box<dyn Comparator>` can be mixed in one list.
pub trait Comparator {
    /// Test `value` against `standard` under `relation`.
    fn compare(&self, standard: i64, relation: Relation, value: i64) -> Outcome;
}

impl<C: Comparator + ?Sized> Comparator for &C {
    fn compare(&self, standard: i64, relation: Relation, value: i64) -> Outcome {
        (**self).compare(standard, relation, value)
    }
}

impl<C: Comparator + ?Sized> Comparator for Box<C> {
    fn compare(&self, standard: i64, relation: Relation, value: i64) -> Outcome {
        (**self).compare(standard, relation, value)
    }
}

/// Comparator backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F> Comparator for FromFn<F>
where
    F: Fn(i64, Relation, i64) -> Outcome,
{
    fn compare(&self, standard: i64, relation: Relation, value: i64) -> Outcome {
        (self.f)(standard, relation, value)
    }
}

/// Turn a `Fn(standard, relation, value) -> Outcome` closure into a [`Comparator`].
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(i64, Relation, i64) -> Outcome,
{
    FromFn { f }
}

/// Plain integer ordering comparator. Stateless and reentrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Numeric;

impl Comparator for Numeric {
    fn compare(&self, standard: i64, relation: Relation, value: i64) -> Outcome {
        compare(standard, relation, value)
    }
}

/// Compare `value` against `standard` using integer ordering.
///
/// `relation` may be a [`Relation`] or a raw relation code. An undeclared code
/// yields `false` with [`ConditionError::InvalidRelation`].
pub fn compare<R>(standard: i64, relation: R, value: i64) -> Outcome
where
    R: TryInto<Relation>,
    ConditionError: From<<R as TryInto<Relation>>::Error>,
{
    let relation: Result<Relation, _> = relation.try_into();
    match relation {
        Ok(rel) => Outcome::of(rel.holds(standard, value)),
        Err(err) => Outcome::fault(err.into()),
    }
}
