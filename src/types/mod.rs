mod argument;
mod error;
mod event;
mod logic;
mod outcome;
mod relation;
mod report;

pub use argument::Argument;
pub use error::ConditionError;
pub use event::{Evaluator, Event};
pub use logic::LogicMode;
pub use outcome::Outcome;
pub use relation::Relation;
pub use report::DecisionReport;
