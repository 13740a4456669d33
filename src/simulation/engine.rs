//! Driver loop for the n-body benchmark.

use super::energy::total_energy;
use super::integrator::leapfrog_step;
use super::scenario::initial_system;

/// Build a fresh system, advance it `steps` times, return its final energy.
///
/// `run(0, dt)` leaves the system untouched and returns the initial energy.
pub fn run(steps: u32, dt: f64) -> f64 {
    let mut sys = initial_system();
    for _ in 0..steps {
        leapfrog_step(&mut sys, dt);
    }
    total_energy(&sys)
}
