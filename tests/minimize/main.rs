#[path = "../../benches/test_functions.rs"]
#[allow(dead_code)]
mod test_functions;

mod constraints;
mod convergence;
