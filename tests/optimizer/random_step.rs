use stochopt::{Dimension, Error, Optimizer, RandomStepOptimizer, SearchSpace, Value};

use crate::test_functions::{mixed, mixed_space};

#[test]
fn test_post_warm_up_asks_always_change_something() {
    let mut opt = RandomStepOptimizer::builder(mixed_space())
        .n_random_starts(5)
        .seed(21)
        .build()
        .unwrap();
    for _ in 0..5 {
        let x = opt.ask();
        let y = mixed(&x).unwrap();
        opt.tell(x, y, None).unwrap();
    }
    assert_eq!(opt.random_starts_left(), 0);

    for _ in 0..300 {
        let incumbent = opt.best().unwrap().0.to_vec();
        let x = opt.ask();
        assert_ne!(x, incumbent);
        let y = mixed(&x).unwrap();
        opt.tell(x, y, None).unwrap();
    }
}

#[test]
fn test_steps_stay_near_incumbent() {
    // With a low rate most coordinates move by small steps only.
    let space = SearchSpace::new(vec![Dimension::continuous(0.0, 1000.0).unwrap()]).unwrap();
    let mut opt = RandomStepOptimizer::builder(space)
        .n_random_starts(1)
        .mutation_rate(0.05)
        .seed(8)
        .build()
        .unwrap();
    let start = opt.ask();
    opt.tell(start.clone(), 0.0, None).unwrap();
    let centre = start[0].as_f64().unwrap();

    let near = opt
        .ask_batch(200)
        .iter()
        .filter(|x| (x[0].as_f64().unwrap() - centre).abs() < 100.0)
        .count();
    assert!(near > 100, "only {near} of 200 steps stayed near the incumbent");
}

#[test]
fn test_discrete_steps_are_rounded() {
    let space = SearchSpace::new(vec![Dimension::discrete(0, 1_000_000).unwrap()]).unwrap();
    let mut opt = RandomStepOptimizer::with_seed(space, 13);
    for i in 0..100 {
        let x = opt.ask();
        assert!(matches!(x[0], Value::Int(0..=1_000_000)), "{x:?}");
        opt.tell(x, f64::from(i % 7), None).unwrap();
    }
}

#[test]
fn test_moves_toward_optimum() {
    let space = SearchSpace::new(vec![Dimension::continuous(-10.0, 10.0).unwrap()]).unwrap();
    let mut opt = RandomStepOptimizer::with_seed(space, 17);
    for _ in 0..300 {
        let x = opt.ask();
        let v = x[0].as_f64().unwrap();
        opt.tell(x, (v - 2.0).abs(), None).unwrap();
    }
    assert!(opt.best_value() < 0.1, "best = {}", opt.best_value());
}

#[test]
fn test_wrong_kind_point_is_rejected_and_ask_returns() {
    let space = SearchSpace::new(vec![Dimension::continuous(0.0, 1.0).unwrap()]).unwrap();
    let mut opt = RandomStepOptimizer::builder(space)
        .n_random_starts(0)
        .seed(4)
        .build()
        .unwrap();
    assert_eq!(
        opt.tell(vec![Value::Int(0)], -1.0, None),
        Err(Error::ValueOutOfBounds { index: 0 })
    );
    assert_eq!(
        opt.tell(Vec::new(), -1.0, None),
        Err(Error::DimensionMismatch {
            expected: 1,
            got: 0
        })
    );
    assert_eq!(opt.n_evaluations(), 0);

    for _ in 0..20 {
        let x = opt.ask();
        assert!(opt.space().contains(&x), "{x:?}");
        let v = x[0].as_f64().unwrap();
        opt.tell(x, v, None).unwrap();
    }
    assert!(opt.result().is_success());
}
