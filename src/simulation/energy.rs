//! Mechanical energy diagnostics.
//!
//! Total energy (kinetic minus pairwise potential) is the scalar the
//! benchmark reports; it is the invariant check for the integrator.

use crate::simulation::states::{SolarSystem, PAIRS};

/// Total mechanical energy of the system.
///
/// Kinetic term: sum of `0.5 * m * |v|^2` over the bodies, in body order.
/// Potential term: sum of `m_A * m_B / d` over the ten pairs, in `PAIRS`
/// order. Both folds run left to right so the rounding matches the
/// reference output.
pub fn total_energy(sys: &SolarSystem) -> f64 {
    let mut kinetic = 0.0;
    for b in &sys.bodies {
        let speed_sq = b.v.x * b.v.x + b.v.y * b.v.y + b.v.z * b.v.z;
        kinetic += 0.5 * b.m * speed_sq;
    }

    let mut potential = 0.0;
    for &(i, j) in PAIRS.iter() {
        let dr = sys.bodies[i].x - sys.bodies[j].x;
        let d = (dr.x * dr.x + dr.y * dr.y + dr.z * dr.z).sqrt();
        potential += (sys.bodies[i].m * sys.bodies[j].m) / d;
    }

    kinetic - potential
}
