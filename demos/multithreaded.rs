use std::sync::Arc;
use std::thread;

use evcond::{Argument, Evaluator, Event, LogicMode, Numeric, Relation};

fn main() {
    let event = Arc::new(Event::new(1, 1));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ev = Arc::clone(&event);
            thread::spawn(move || {
                let age = 16_i64 + i64::from(i);
                let args = [
                    Argument::new(age, Relation::GreaterThanOrEqual, 18),
                    Argument::new(age, Relation::LessThan, 65),
                ];

                let result = ev.decide(&[&Numeric, &Numeric], &args, LogicMode::And);
                println!("Thread {i}: {result}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
