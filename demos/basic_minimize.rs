//! Basic minimization with each convenience entry point.
//!
//! Minimizes the Branin function on `[-5, 10] x [0, 15]` (global minimum
//! ≈ 0.397887) with random search, random-step search and the genetic
//! algorithm.
//!
//! Run with: `cargo run --example basic_minimize`

use core::convert::Infallible;
use core::time::Duration;

use stochopt::prelude::*;

fn branin(x: &[Value]) -> Result<f64, Infallible> {
    let Some(v) = numeric(x) else {
        return Ok(f64::INFINITY);
    };
    let (x1, x2) = (v[0], v[1]);
    let pi = core::f64::consts::PI;
    let b = 5.1 / (4.0 * pi * pi);
    let c = 5.0 / pi;
    let t = 1.0 / (8.0 * pi);
    Ok((x2 - b * x1 * x1 + c * x1 - 6.0).powi(2) + 10.0 * (1.0 - t) * x1.cos() + 10.0)
}

fn main() -> stochopt::Result<()> {
    let space = SearchSpace::new(vec![
        Dimension::continuous(-5.0, 10.0)?,
        Dimension::continuous(0.0, 15.0)?,
    ])?;

    let Ok(random) = random_minimize(branin, space.clone(), Duration::from_millis(100));
    println!("random search (100 ms): {random}");

    let Ok(stepped) = rs_minimize(branin, space.clone(), 500);
    println!("random step (500 calls): {stepped}");

    let Ok(genetic) = ga_minimize(branin, space, 500);
    println!("genetic (500 calls):     {genetic}");

    Ok(())
}
