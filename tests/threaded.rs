use std::sync::Arc;
use std::thread;

use evcond::{Argument, Evaluator, Event, LogicMode, Numeric, Outcome, Relation};

#[test]
fn decide_across_threads() {
    let event = Arc::new(Event::new(42, 7));

    let cases: Vec<(i64, LogicMode)> = vec![
        // age, mode
        (25, LogicMode::And),
        (15, LogicMode::And),
        (15, LogicMode::Or),
        (70, LogicMode::Not),
        (40, LogicMode::Not),
    ];

    let handles: Vec<_> = cases
        .into_iter()
        .map(|(age, mode)| {
            let ev = Arc::clone(&event);
            thread::spawn(move || {
                // adult and under 65
                let args = [
                    Argument::new(age, Relation::GreaterThanOrEqual, 18),
                    Argument::new(age, Relation::LessThan, 65),
                ];
                ev.decide(&[&Numeric, &Numeric], &args, mode)
            })
        })
        .collect();

    let results: Vec<Outcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0], Outcome::of(true));
    assert_eq!(results[1], Outcome::of(false));
    assert_eq!(results[2], Outcome::of(true));
    assert_eq!(results[3], Outcome::of(false));
    assert_eq!(results[4], Outcome::of(false));
}

#[test]
fn shared_event_gives_same_answer_everywhere() {
    let event = Arc::new(Event::new(1, 1));
    let args = Arc::new([
        Argument::new(3, Relation::NotEqual, 4),
        Argument::new(9, Relation::LessThanOrEqual, 9),
    ]);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ev = Arc::clone(&event);
            let args = Arc::clone(&args);
            thread::spawn(move || ev.decide(&[&Numeric, &Numeric], &args[..], LogicMode::And))
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), Outcome::of(true));
    }
}
