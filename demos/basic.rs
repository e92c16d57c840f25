use evcond::{Argument, Evaluator, Event, LogicMode, Numeric, Relation};

fn main() {
    env_logger::init();

    let event = Event::new(1, 1);
    println!("{event}");

    // Both conditions must hold: 20 >= 10 and 10 >= 10
    let args = [
        Argument::new(20, Relation::GreaterThanOrEqual, 10),
        Argument::new(10, Relation::GreaterThanOrEqual, 10),
    ];

    match event
        .decide(&[&Numeric, &Numeric], &args, LogicMode::And)
        .into_result()
    {
        Ok(true) => println!("Condition set satisfied."),
        Ok(false) => println!("Condition set not satisfied."),
        Err(err) => eprintln!("Evaluation failed: {err}"),
    }
}
