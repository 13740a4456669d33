//! Pairwise Newtonian gravity for the five-body system.
//!
//! Unlike an acceleration-buffer formulation, the kicks here are folded
//! sequentially: each pair's velocity update sees the velocities already
//! updated by every earlier pair in `PAIRS` order. Floating-point addition
//! is not associative, so this fold order is what makes a run reproduce the
//! reference output bit for bit.

use crate::simulation::states::{SolarSystem, PAIRS};

/// Fold one gravity kick of size `dt` over all ten body pairs, in order.
///
/// For a pair (A, B):
/// - `dr = x_A - x_B`
/// - `d = sqrt(dr . dr)`
/// - `mag = dt / d^3`
/// - `v_A += -m_B * mag * dr`
/// - `v_B +=  m_A * mag * dr`
///
/// Distances never degenerate for the reference initial conditions; a zero
/// separation is an unguarded precondition of the domain.
pub fn accumulate_kicks(sys: &mut SolarSystem, dt: f64) {
    for &(i, j) in PAIRS.iter() {
        let dr = sys.bodies[i].x - sys.bodies[j].x;

        // Separation distance |dr|, summed component-wise in x, y, z order
        let d = (dr.x * dr.x + dr.y * dr.y + dr.z * dr.z).sqrt();
        let mag = dt / (d * d * d);

        let mi = sys.bodies[i].m;
        let mj = sys.bodies[j].m;

        // Equal and opposite kicks, scalar coefficient first
        sys.bodies[i].v += -mj * mag * dr;
        sys.bodies[j].v += mi * mag * dr;
    }
}
