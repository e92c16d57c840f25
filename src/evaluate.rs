use log::{debug, trace};

use crate::{Argument, Comparator, ConditionError, DecisionReport, LogicMode, Outcome};

pub(crate) fn decide<M>(
    comparators: &[&dyn Comparator],
    arguments: &[Argument],
    mode: M,
) -> DecisionReport
where
    M: TryInto<LogicMode>,
    ConditionError: From<<M as TryInto<LogicMode>>::Error>,
{
    if comparators.is_empty() {
        debug!("rejecting decision: no comparators");
        return DecisionReport::rejected(Outcome::fault(ConditionError::EmptyComparatorSet));
    }
    if comparators.len() != arguments.len() {
        debug!(
            "rejecting decision: {} comparators, {} arguments",
            comparators.len(),
            arguments.len()
        );
        return DecisionReport::rejected(Outcome::fault(ConditionError::ArityMismatch {
            comparators: comparators.len(),
            arguments: arguments.len(),
        }));
    }
    let mode: LogicMode = match mode.try_into() {
        Ok(mode) => mode,
        Err(err) => {
            let err = ConditionError::from(err);
            debug!("rejecting decision: {err}");
            return DecisionReport::rejected(Outcome::fault(err));
        }
    };

    // (comparator result that stops the scan, decision on stop, decision when exhausted)
    let (stop_on, on_stop, on_exhausted) = match mode {
        LogicMode::And => (false, false, true),
        LogicMode::Or => (true, true, false),
        LogicMode::Not => (true, false, true),
    };

    for (idx, (comparator, arg)) in comparators.iter().zip(arguments).enumerate() {
        let (holds, error) = comparator
            .compare(arg.standard, arg.relation, arg.compare)
            .into_parts();
        trace!("{mode} comparator {idx}: {arg} -> {holds}");

        if holds == stop_on {
            // The triggering call's error travels with the decision, even if
            // the boolean alone already settles it.
            debug!("{mode} short-circuited at comparator {idx}");
            return DecisionReport::new(
                Outcome::new(on_stop, error),
                Some(mode),
                idx + 1,
                Some(idx),
            );
        }
    }

    DecisionReport::new(
        Outcome::of(on_exhausted),
        Some(mode),
        comparators.len(),
        None,
    )
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::decide;
    use crate::{
        from_fn, Argument, Comparator, ConditionError, LogicMode, Numeric, Outcome, Relation,
    };

    fn gte(compare: i64, standard: i64) -> Argument {
        Argument::new(compare, Relation::GreaterThanOrEqual, standard)
    }

    #[test]
    fn and_all_true() {
        let args = [gte(20, 10), gte(10, 10)];
        let report = decide(&[&Numeric, &Numeric], &args, LogicMode::And);
        assert_eq!(report.outcome(), &Outcome::of(true));
        assert_eq!(report.evaluated(), 2);
        assert_eq!(report.trigger(), None);
    }

    #[test]
    fn and_stops_on_first_false() {
        let args = [gte(20, 10), gte(5, 10), gte(30, 10)];
        let report = decide(&[&Numeric, &Numeric, &Numeric], &args, LogicMode::And);
        assert_eq!(report.outcome(), &Outcome::of(false));
        assert_eq!(report.evaluated(), 2);
        assert_eq!(report.trigger(), Some(1));
    }

    #[test]
    fn or_stops_on_first_true() {
        let args = [gte(5, 10), gte(20, 10), gte(30, 10)];
        let report = decide(&[&Numeric, &Numeric, &Numeric], &args, LogicMode::Or);
        assert_eq!(report.outcome(), &Outcome::of(true));
        assert_eq!(report.trigger(), Some(1));
    }

    #[test]
    fn or_none_true() {
        let args = [gte(5, 10), gte(6, 10)];
        let report = decide(&[&Numeric, &Numeric], &args, LogicMode::Or);
        assert_eq!(report.outcome(), &Outcome::of(false));
        assert_eq!(report.evaluated(), 2);
    }

    #[test]
    fn not_none_true() {
        let args = [gte(5, 10), gte(6, 10)];
        let report = decide(&[&Numeric, &Numeric], &args, LogicMode::Not);
        assert_eq!(report.outcome(), &Outcome::of(true));
    }

    #[test]
    fn not_any_true() {
        let args = [gte(5, 10), gte(60, 10)];
        let report = decide(&[&Numeric, &Numeric], &args, LogicMode::Not);
        assert_eq!(report.outcome(), &Outcome::of(false));
        assert_eq!(report.trigger(), Some(1));
    }

    #[test]
    fn empty_set_checked_before_mode() {
        let report = decide(&[], &[], 9_u8);
        assert_eq!(
            report.outcome(),
            &Outcome::fault(ConditionError::EmptyComparatorSet)
        );
        assert_eq!(report.mode(), None);
    }

    #[test]
    fn arity_checked_before_mode() {
        let report = decide(&[&Numeric, &Numeric], &[gte(1, 1)], 9_u8);
        assert_eq!(
            report.outcome(),
            &Outcome::fault(ConditionError::ArityMismatch {
                comparators: 2,
                arguments: 1,
            })
        );
    }

    #[test]
    fn undeclared_mode_runs_nothing() {
        let calls = Cell::new(0);
        let spy = from_fn(|_: i64, _: Relation, _: i64| {
            calls.set(calls.get() + 1);
            Outcome::of(true)
        });
        let report = decide(&[&spy], &[gte(1, 1)], 3_u8);
        assert_eq!(
            report.outcome(),
            &Outcome::fault(ConditionError::InvalidLogicMode { code: "3".into() })
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn arguments_are_passed_standard_first() {
        let seen = Cell::new(None);
        let spy = from_fn(|standard: i64, relation: Relation, value: i64| {
            seen.set(Some((standard, relation, value)));
            Outcome::of(true)
        });
        let _ = decide(
            &[&spy as &dyn Comparator],
            &[Argument::new(3, Relation::LessThan, 8)],
            LogicMode::And,
        );
        assert_eq!(seen.get(), Some((8, Relation::LessThan, 3)));
    }

    #[test]
    fn and_forwards_error_of_failing_call() {
        let bad = from_fn(|_: i64, _: Relation, _: i64| {
            Outcome::fault(ConditionError::InvalidRelation { code: "x".into() })
        });
        let report = decide(&[&Numeric, &bad], &[gte(2, 1), gte(2, 1)], LogicMode::And);
        assert_eq!(
            report.outcome(),
            &Outcome::fault(ConditionError::InvalidRelation { code: "x".into() })
        );
    }

    #[test]
    fn and_drops_error_of_passing_call() {
        let noisy = from_fn(|_: i64, _: Relation, _: i64| {
            Outcome::new(true, Some(ConditionError::EmptyComparatorSet))
        });
        let report = decide(&[&noisy, &Numeric], &[gte(2, 1), gte(2, 1)], LogicMode::And);
        assert_eq!(report.outcome(), &Outcome::of(true));
    }

    #[test]
    fn or_forwards_error_alongside_true() {
        let noisy = from_fn(|_: i64, _: Relation, _: i64| {
            Outcome::new(true, Some(ConditionError::EmptyComparatorSet))
        });
        let report = decide(&[&Numeric, &noisy], &[gte(0, 1), gte(0, 1)], LogicMode::Or);
        assert_eq!(
            report.outcome(),
            &Outcome::new(true, Some(ConditionError::EmptyComparatorSet))
        );
    }

    #[test]
    fn not_forwards_error_of_matching_call() {
        let noisy = from_fn(|_: i64, _: Relation, _: i64| {
            Outcome::new(true, Some(ConditionError::EmptyComparatorSet))
        });
        let report = decide(&[&noisy], &[gte(0, 1)], LogicMode::Not);
        assert_eq!(
            report.outcome(),
            &Outcome::fault(ConditionError::EmptyComparatorSet)
        );
    }

    #[test]
    fn or_ignores_errors_of_false_calls() {
        let bad = from_fn(|_: i64, _: Relation, _: i64| {
            Outcome::fault(ConditionError::InvalidRelation { code: "x".into() })
        });
        let report = decide(&[&bad, &bad], &[gte(0, 1), gte(0, 1)], LogicMode::Or);
        assert_eq!(report.outcome(), &Outcome::of(false));
    }
}
