use stochopt::{Budget, GeneticOptimizer, RandomStepOptimizer, ga_minimize, minimize, rs_minimize};

use crate::test_functions::{
    BRANIN_MIN, branin, branin_space, box_space, mixed, mixed_space, on_values, rastrigin,
};

#[test]
fn genetic_branin_within_500_calls() {
    for seed in 0..5 {
        let mut opt = GeneticOptimizer::with_seed(branin_space(), seed);
        let result = minimize(&mut opt, on_values(branin), Budget::Calls(500)).unwrap();
        assert!(result.fun <= 5.0, "seed {seed}: fun = {}", result.fun);
        assert!(result.fun >= BRANIN_MIN - 1e-6);
    }
}

#[test]
fn random_step_branin_within_500_calls() {
    for seed in 0..5 {
        let mut opt = RandomStepOptimizer::with_seed(branin_space(), seed);
        let result = minimize(&mut opt, on_values(branin), Budget::Calls(500)).unwrap();
        assert!(result.fun <= 5.0, "seed {seed}: fun = {}", result.fun);
    }
}

#[test]
fn convenience_functions_branin() {
    let ga = ga_minimize(on_values(branin), branin_space(), 500).unwrap();
    let rs = rs_minimize(on_values(branin), branin_space(), 500).unwrap();
    assert!(ga.fun <= 5.0, "ga: {}", ga.fun);
    assert!(rs.fun <= 5.0, "rs: {}", rs.fun);
    assert_eq!(ga.n_evaluations, 500);
    assert_eq!(rs.n_evaluations, 500);
}

#[test]
fn mixed_space_reaches_optimum_region() {
    for seed in 0..3 {
        let mut opt = GeneticOptimizer::with_seed(mixed_space(), seed);
        let result = minimize(&mut opt, mixed, Budget::Calls(400)).unwrap();
        assert!(result.fun < 1.5, "seed {seed}: fun = {}", result.fun);
    }
}

#[test]
fn rastrigin_improves_on_warm_up() {
    let mut opt = RandomStepOptimizer::builder(box_space(3, -5.12, 5.12))
        .n_random_starts(20)
        .seed(9)
        .build()
        .unwrap();
    let result = minimize(&mut opt, on_values(rastrigin), Budget::Calls(600)).unwrap();
    let warm_up_best = result.history[..20]
        .iter()
        .map(|o| o.value)
        .fold(f64::INFINITY, f64::min);
    assert!(result.fun < warm_up_best);
}
