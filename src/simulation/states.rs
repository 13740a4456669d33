//! Core state types for the solar-system benchmark.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec3` (position, velocity, mass)
//! - `SolarSystem`, the fixed five-body ensemble
//!
//! The system is deliberately not a general N-body array: the benchmark
//! hard-codes the five bodies and their ten-pair interaction list, and the
//! enumeration order of `PAIRS` fixes the floating-point rounding of every
//! step, so it is part of the observable output.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

// Indices into `SolarSystem::bodies`
pub const SUN: usize = 0;
pub const JUPITER: usize = 1;
pub const SATURN: usize = 2;
pub const URANUS: usize = 3;
pub const NEPTUNE: usize = 4;

/// The ten unordered body pairs, in the order the kicks are folded
pub const PAIRS: [(usize, usize); 10] = [
    (SUN, JUPITER),
    (SUN, SATURN),
    (SUN, URANUS),
    (SUN, NEPTUNE),
    (JUPITER, SATURN),
    (JUPITER, URANUS),
    (JUPITER, NEPTUNE),
    (SATURN, URANUS),
    (SATURN, NEPTUNE),
    (URANUS, NEPTUNE),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position, AU
    pub v: NVec3, // velocity, AU/day scaled by days-per-year
    pub m: f64, // mass, fraction of the solar mass
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolarSystem {
    pub bodies: [Body; 5], // fixed order: sun, jupiter, saturn, uranus, neptune
}

impl SolarSystem {
    /// Total linear momentum, folded in body order
    pub fn momentum(&self) -> NVec3 {
        let mut p = NVec3::zeros();
        for b in &self.bodies {
            p += b.m * b.v;
        }
        p
    }
}
