//! Constrained search over a mixed continuous, integer and categorical space.
//!
//! Picks a learning rate, a layer count and an activation for a made-up
//! training cost, subject to a compute budget. Points over budget are
//! infeasible and never reported as the solution.
//!
//! Run with: `cargo run --example constrained_mixed`

use core::convert::Infallible;

use stochopt::prelude::*;

const ACTIVATIONS: [&str; 3] = ["relu", "tanh", "sigmoid"];

fn cost(x: &[Value]) -> Result<f64, Infallible> {
    let lr = x[0].as_f64().unwrap_or_default();
    let layers = x[1].as_f64().unwrap_or_default();
    let activation_penalty = match x[2].as_index() {
        Some(0) => 0.0,
        Some(1) => 0.05,
        _ => 0.2,
    };
    Ok((lr.log10() + 2.5).powi(2) + 1.0 / layers + activation_penalty)
}

/// Positive when more than 6 layers are used.
fn over_budget(x: &[Value]) -> Result<f64, Infallible> {
    let layers = x[1].as_f64().unwrap_or_default();
    Ok((layers - 6.0).max(0.0))
}

fn main() -> stochopt::Result<()> {
    let space = SearchSpace::new(vec![
        Dimension::continuous(1e-5, 1e-1)?,
        Dimension::discrete(1, 12)?,
        Dimension::categorical(ACTIVATIONS)?,
    ])?;

    let mut optimizer = RandomStepOptimizer::builder(space)
        .n_random_starts(20)
        .mutation_rate(0.15)
        .seed(7)
        .build()?;

    let Ok(result) = minimize(
        &mut optimizer,
        Constrained::new(cost, over_budget),
        Budget::Calls(400),
    );

    println!("{result}");
    if let Some(x) = &result.x {
        let activation = optimizer.space().category(2, &x[2]);
        println!(
            "lr = {}, layers = {}, activation = {}",
            x[0],
            x[1],
            activation.map_or_else(|| "?".to_string(), ToString::to_string),
        );
    }

    let infeasible = result
        .history
        .iter()
        .filter(|o| !o.is_feasible(DEFAULT_TOLERANCE))
        .count();
    println!("{infeasible} of {} evaluations were over budget", result.n_evaluations);

    Ok(())
}
