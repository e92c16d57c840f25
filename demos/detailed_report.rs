use evcond::{Argument, Evaluator, Event, LogicMode, Numeric, Relation};

fn main() {
    env_logger::init();

    let event = Event::new(7, 2);

    let args = [
        Argument::new(3, Relation::Equal, 4),
        Argument::new(5, Relation::GreaterThan, 4),
        Argument::new(9, Relation::LessThan, 4),
    ];

    for mode in LogicMode::ALL {
        let report = event.decide_detailed(&[&Numeric, &Numeric, &Numeric], &args, mode);
        println!("{mode}: {report}");
    }
}
