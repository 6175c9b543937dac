use stochopt::{Dimension, Error, GeneticOptimizer, Optimizer, SearchSpace, Value};

use crate::test_functions::{box_space, sphere};

#[test]
fn test_warm_up_is_uniform_then_evolves() {
    let mut opt = GeneticOptimizer::builder(box_space(2, -1.0, 1.0))
        .n_random_starts(4)
        .seed(3)
        .build()
        .unwrap();
    for left in (1..=4).rev() {
        assert_eq!(opt.random_starts_left(), left);
        let x = opt.ask();
        opt.tell(x, 1.0, None).unwrap();
    }
    assert_eq!(opt.random_starts_left(), 0);
    assert_eq!(opt.history().len(), 4);
}

#[test]
fn test_full_tournament_with_tiny_rate_reproposes_best() {
    // Fraction 1.0 always selects the best observation for both parents.
    // With a tiny mutation rate most children equal that observation.
    let mut opt = GeneticOptimizer::builder(box_space(3, -5.0, 5.0))
        .n_random_starts(10)
        .tournament_fraction(1.0)
        .mutation_rate(1e-6)
        .seed(5)
        .build()
        .unwrap();
    for _ in 0..10 {
        let x = opt.ask();
        let y = sphere(&stochopt::numeric(&x).unwrap());
        opt.tell(x, y, None).unwrap();
    }
    let best = opt.best().unwrap().0.to_vec();
    let same = opt.ask_batch(50).into_iter().filter(|x| *x == best).count();
    assert!(same >= 45, "only {same} of 50 children equal the best");
}

#[test]
fn test_converges_on_sphere() {
    let mut opt = GeneticOptimizer::with_seed(box_space(2, -5.0, 5.0), 31);
    for _ in 0..400 {
        let x = opt.ask();
        let y = sphere(&stochopt::numeric(&x).unwrap());
        opt.tell(x, y, None).unwrap();
    }
    assert!(opt.best_value() < 0.5, "best = {}", opt.best_value());
}

#[test]
fn test_categorical_only_space() {
    let space = SearchSpace::new(vec![
        Dimension::categorical(["a", "b", "c"]).unwrap(),
        Dimension::categorical([true, false]).unwrap(),
    ])
    .unwrap();
    let mut opt = GeneticOptimizer::with_seed(space.clone(), 2);
    for _ in 0..150 {
        let x = opt.ask();
        assert!(space.contains(&x));
        let y = if x[0].as_index() == Some(2) && x[1].as_index() == Some(1) {
            0.0
        } else {
            1.0
        };
        opt.tell(x, y, None).unwrap();
    }
    assert!(opt.best_value() < 0.5);
}

#[test]
fn test_invalid_settings_are_rejected() {
    let space = box_space(1, 0.0, 1.0);
    for fraction in [0.0, -1.0, 1.5, f64::NAN] {
        let err = GeneticOptimizer::builder(space.clone())
            .tournament_fraction(fraction)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTournamentFraction(_)));
    }
    assert!(matches!(
        GeneticOptimizer::builder(space).tolerance(-0.5).build(),
        Err(Error::InvalidTolerance(_))
    ));
}

#[test]
fn test_malformed_points_are_rejected_and_offspring_stay_in_space() {
    let mut opt = GeneticOptimizer::builder(box_space(2, -1.0, 1.0))
        .n_random_starts(2)
        .seed(31)
        .build()
        .unwrap();
    assert_eq!(
        opt.tell(vec![Value::Float(0.0)], -100.0, None),
        Err(Error::DimensionMismatch {
            expected: 2,
            got: 1
        })
    );
    assert_eq!(
        opt.tell(vec![Value::Float(0.0), Value::Int(0)], -100.0, None),
        Err(Error::ValueOutOfBounds { index: 1 })
    );
    assert_eq!(opt.n_evaluations(), 0);

    for _ in 0..100 {
        let x = opt.ask();
        assert_eq!(x.len(), 2);
        assert!(opt.space().contains(&x), "{x:?}");
        let y = sphere(&stochopt::numeric(&x).unwrap());
        opt.tell(x, y, None).unwrap();
    }
}
