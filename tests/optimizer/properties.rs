//! Properties every optimizer must satisfy.

use stochopt::{
    GeneticOptimizer, Optimizer, RandomOptimizer, RandomStepOptimizer, SearchSpace,
};

use crate::test_functions::{mixed, mixed_space};

fn all(space: &SearchSpace, seed: u64) -> Vec<(&'static str, Box<dyn Optimizer>)> {
    let random: Box<dyn Optimizer> = Box::new(RandomOptimizer::with_seed(space.clone(), seed));
    let random_step: Box<dyn Optimizer> =
        Box::new(RandomStepOptimizer::with_seed(space.clone(), seed));
    let genetic: Box<dyn Optimizer> = Box::new(GeneticOptimizer::with_seed(space.clone(), seed));
    vec![
        ("random", random),
        ("random_step", random_step),
        ("genetic", genetic),
    ]
}

#[test]
fn every_ask_is_inside_the_space() {
    let space = mixed_space();
    for (name, mut opt) in all(&space, 11) {
        for _ in 0..400 {
            let x = opt.ask();
            assert!(space.contains(&x), "{name} asked {x:?}");
            let y = mixed(&x).unwrap();
            opt.tell(x, y, None).unwrap();
        }
    }
}

#[test]
fn incumbent_never_gets_worse() {
    let space = mixed_space();
    for (name, mut opt) in all(&space, 12) {
        let mut previous = f64::INFINITY;
        for _ in 0..300 {
            let x = opt.ask();
            let y = mixed(&x).unwrap();
            opt.tell(x, y, None).unwrap();
            let best = opt.best_value();
            assert!(best <= previous, "{name}: {best} > {previous}");
            previous = best;
        }
    }
}

#[test]
fn equal_seeds_reproduce_asks() {
    let space = mixed_space();
    for ((name, mut a), (_, mut b)) in all(&space, 99).into_iter().zip(all(&space, 99)) {
        for _ in 0..150 {
            let xa = a.ask();
            let xb = b.ask();
            assert_eq!(xa, xb, "{name} diverged");
            let y = mixed(&xa).unwrap();
            a.tell(xa, y, None).unwrap();
            b.tell(xb, y, None).unwrap();
        }
    }
}

#[test]
fn different_seeds_diverge() {
    let space = mixed_space();
    for ((name, mut a), (_, mut b)) in all(&space, 1).into_iter().zip(all(&space, 2)) {
        let xs = a.ask_batch(10);
        let ys = b.ask_batch(10);
        assert_ne!(xs, ys, "{name}");
    }
}

#[test]
fn best_is_always_feasible() {
    let space = mixed_space();
    for (name, mut opt) in all(&space, 5) {
        for i in 0..100 {
            let x = opt.ask();
            // Every other point is infeasible and scores better.
            let (value, violation) = if i % 2 == 0 { (-1.0, 1.0) } else { (1.0, 0.0) };
            opt.tell(x, value, Some(violation)).unwrap();
        }
        assert!((opt.best_value() - 1.0).abs() < f64::EPSILON, "{name}");
    }
}

#[test]
fn n_evaluations_counts_tells_not_asks() {
    let space = mixed_space();
    for (name, mut opt) in all(&space, 6) {
        let batch = opt.ask_batch(5);
        assert_eq!(opt.n_evaluations(), 0, "{name}");
        for x in batch {
            opt.tell(x, 0.0, None).unwrap();
        }
        assert_eq!(opt.n_evaluations(), 5, "{name}");
    }
}
