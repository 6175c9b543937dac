use core::convert::Infallible;

use stochopt::{
    Budget, Constrained, DEFAULT_TOLERANCE, GeneticOptimizer, MESSAGE_FOUND, MESSAGE_NOT_FOUND,
    Objective, RandomOptimizer, RandomStepOptimizer, Value, ga_minimize, minimize, rs_minimize,
};

use crate::test_functions::{box_space, branin_space};

fn x0(x: &[Value]) -> f64 {
    x[0].as_f64().unwrap_or_default()
}

#[test]
fn always_infeasible_finds_nothing() {
    for (name, result) in [
        (
            "genetic",
            ga_minimize(
                Constrained::new(
                    |x: &[Value]| Ok::<_, Infallible>(x0(x)),
                    |_: &[Value]| Ok::<_, Infallible>(1.0),
                ),
                branin_space(),
                60,
            ),
        ),
        (
            "random_step",
            rs_minimize(
                Constrained::new(
                    |x: &[Value]| Ok::<_, Infallible>(x0(x)),
                    |_: &[Value]| Ok::<_, Infallible>(1.0),
                ),
                branin_space(),
                60,
            ),
        ),
    ] {
        let result = result.unwrap();
        assert!(result.x.is_none(), "{name}");
        assert!(result.fun.is_infinite() && result.fun > 0.0, "{name}");
        assert_eq!(result.message, MESSAGE_NOT_FOUND, "{name}");
        assert_eq!(result.n_evaluations, 60, "{name}");
        assert!(!result.is_success());
    }
}

#[test]
fn violation_at_tolerance_is_infeasible() {
    let mut opt = RandomOptimizer::with_seed(branin_space(), 4);
    let result = minimize(
        &mut opt,
        Constrained::new(
            |x: &[Value]| Ok::<_, Infallible>(x0(x)),
            |_: &[Value]| Ok::<_, Infallible>(DEFAULT_TOLERANCE),
        ),
        Budget::Calls(20),
    )
    .unwrap();
    assert!(result.x.is_none());
}

#[test]
fn violation_below_tolerance_is_feasible() {
    let mut opt = RandomOptimizer::with_seed(branin_space(), 4);
    let result = minimize(
        &mut opt,
        Constrained::new(
            |x: &[Value]| Ok::<_, Infallible>(x0(x)),
            |_: &[Value]| Ok::<_, Infallible>(DEFAULT_TOLERANCE / 2.0),
        ),
        Budget::Calls(20),
    )
    .unwrap();
    assert_eq!(result.message, MESSAGE_FOUND);
}

#[test]
fn solution_respects_constraint() {
    // Minimize x subject to x >= 2; the optimum sits on the boundary.
    let objective = || {
        Constrained::new(
            |x: &[Value]| Ok::<_, Infallible>(x0(x)),
            |x: &[Value]| Ok::<_, Infallible>((2.0 - x0(x)).max(0.0)),
        )
    };

    for seed in 0..5 {
        let mut ga = GeneticOptimizer::with_seed(box_space(1, -5.0, 5.0), seed);
        let mut rs = RandomStepOptimizer::with_seed(box_space(1, -5.0, 5.0), seed);
        for result in [
            minimize(&mut ga, objective(), Budget::Calls(300)).unwrap(),
            minimize(&mut rs, objective(), Budget::Calls(300)).unwrap(),
        ] {
            let x = x0(result.x.as_deref().unwrap());
            assert!(x > 2.0 - DEFAULT_TOLERANCE, "seed {seed}: x = {x}");
            assert!(x < 2.5, "seed {seed}: x = {x}");
            for o in &result.history {
                assert!((o.violation - (2.0 - x0(&o.point)).max(0.0)).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn constrained_parts_can_be_recovered() {
    let mut c = Constrained::new(
        |x: &[Value]| Ok::<_, Infallible>(x0(x) * 2.0),
        |x: &[Value]| Ok::<_, Infallible>(x0(x)),
    );
    let point: &[Value] = &[Value::Float(1.5)];
    assert_eq!(c.evaluate(point), Ok(3.0));
    assert_eq!(c.violation(point), Ok(Some(1.5)));

    let (mut f, mut g) = c.into_inner();
    assert_eq!(f(point), Ok(3.0));
    assert_eq!(g(point), Ok(1.5));
}
