//! Fixed-step time integrator for the five-body system.
//!
//! A single leapfrog-style step: all pairwise velocity kicks first, then a
//! full-step position drift using the updated velocities. One force pass per
//! step, in-place.

use super::forces::accumulate_kicks;
use super::states::SolarSystem;

/// Advance the system by one step of size `dt`.
///
/// Kick: fold the ten pairwise velocity updates in `PAIRS` order.
/// Drift: `x += dt * v` for every body, using the kicked velocities.
/// Masses are untouched.
pub fn leapfrog_step(sys: &mut SolarSystem, dt: f64) {
    accumulate_kicks(sys, dt);

    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }
}
