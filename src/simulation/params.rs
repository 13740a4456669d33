//! Numerical parameters for the benchmark run.
//!
//! `Parameters` holds the fixed step size and step count. The defaults are
//! the reference configuration; the binary may override the step count
//! without changing the result for a given count.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,    // step size
    pub steps: u32, // number of integration steps
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 0.01,
            steps: 100_000,
        }
    }
}
