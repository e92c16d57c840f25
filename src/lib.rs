mod compare;
mod evaluate;
mod types;

pub use compare::{compare, from_fn, Comparator, FromFn, Numeric};
pub use types::{
    Argument, ConditionError, DecisionReport, Evaluator, Event, LogicMode, Outcome, Relation,
};
