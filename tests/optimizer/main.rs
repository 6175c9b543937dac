#![allow(clippy::cast_precision_loss)]

#[path = "../../benches/test_functions.rs"]
#[allow(dead_code)]
mod test_functions;

mod genetic;
mod properties;
mod random_step;
