//! Ask-and-tell interface: decouple proposing points from evaluating them.
//!
//! Ask the optimizer for a batch, evaluate it however you like (workers,
//! external processes, a lab bench), then tell it the outcomes.
//!
//! Run with: `cargo run --example ask_and_tell`

use stochopt::prelude::*;

fn main() -> stochopt::Result<()> {
    let space = SearchSpace::new(vec![
        Dimension::continuous(-5.0, 5.0)?,
        Dimension::continuous(-5.0, 5.0)?,
    ])?;

    let mut optimizer = GeneticOptimizer::builder(space)
        .n_random_starts(8)
        .tournament_fraction(0.25)
        .seed(42)
        .build()?;

    for batch in 0..10 {
        let points = optimizer.ask_batch(8);

        // Evaluate the batch (could be sent to workers)
        let values: Vec<f64> = points
            .iter()
            .map(|x| {
                let v = numeric(x).unwrap_or_default();
                (v[0] - 1.0).powi(2) + (v[1] + 2.0).powi(2)
            })
            .collect();

        for (x, y) in points.into_iter().zip(values) {
            optimizer.tell(x, y, None)?;
        }

        println!(
            "Batch {}: {} evaluations, best = {:.6}",
            batch + 1,
            optimizer.n_evaluations(),
            optimizer.best_value(),
        );
    }

    println!("{}", optimizer.result());
    Ok(())
}
