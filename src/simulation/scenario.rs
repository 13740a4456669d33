//! Initial conditions for the solar-system benchmark.
//!
//! Builds the five-body system from literal orbital elements: positions in
//! AU, velocities in AU/day scaled by `DAYS_PER_YEAR`, masses as fractions
//! of `SOLAR_MASS = 4 * pi^2`. After construction the sun's velocity is
//! offset against the combined momentum of the planets so the center of
//! mass stays put.

use std::f64::consts::PI;

use crate::simulation::states::{Body, NVec3, SolarSystem, SUN};

pub const SOLAR_MASS: f64 = 4.0 * (PI * PI);
pub const DAYS_PER_YEAR: f64 = 365.24;

fn sun() -> Body {
    Body {
        x: NVec3::zeros(),
        v: NVec3::zeros(),
        m: SOLAR_MASS,
    }
}

fn jupiter() -> Body {
    Body {
        x: NVec3::new(
            4.84143144246472090,
            -1.16032004402742839,
            -0.103622044471123109,
        ),
        v: NVec3::new(
            0.00166007664274403694 * DAYS_PER_YEAR,
            0.00769901118419740425 * DAYS_PER_YEAR,
            -0.0000690460016972063023 * DAYS_PER_YEAR,
        ),
        m: 0.000954791938424326609 * SOLAR_MASS,
    }
}

fn saturn() -> Body {
    Body {
        x: NVec3::new(
            8.34336671824457987,
            4.12479856412430479,
            -0.403523417114321381,
        ),
        v: NVec3::new(
            -0.00276742510726862411 * DAYS_PER_YEAR,
            0.00499852801234917238 * DAYS_PER_YEAR,
            0.0000230417297573763929 * DAYS_PER_YEAR,
        ),
        m: 0.000285885980666130812 * SOLAR_MASS,
    }
}

fn uranus() -> Body {
    Body {
        x: NVec3::new(
            12.8943695621391310,
            -15.1111514016986312,
            -0.223307578892655734,
        ),
        v: NVec3::new(
            0.00296460137564761618 * DAYS_PER_YEAR,
            0.00237847173959480950 * DAYS_PER_YEAR,
            -0.0000296589568540237556 * DAYS_PER_YEAR,
        ),
        m: 0.0000436624404335156298 * SOLAR_MASS,
    }
}

fn neptune() -> Body {
    Body {
        x: NVec3::new(
            15.3796971148509165,
            -25.9193146099879641,
            0.179258772950371181,
        ),
        v: NVec3::new(
            0.00268067772490389322 * DAYS_PER_YEAR,
            0.00162824170038242295 * DAYS_PER_YEAR,
            -0.0000951592254519715870 * DAYS_PER_YEAR,
        ),
        m: 0.0000515138902046611451 * SOLAR_MASS,
    }
}

/// Build the five-body system at t = 0 with zero total momentum.
///
/// The sun starts at the origin at rest; its velocity is then replaced by
/// `-p / SOLAR_MASS`, where `p` is the momentum of the whole ensemble.
pub fn initial_system() -> SolarSystem {
    let mut sys = SolarSystem {
        bodies: [sun(), jupiter(), saturn(), uranus(), neptune()],
    };

    let p = sys.momentum();
    sys.bodies[SUN].v = -p / SOLAR_MASS;

    sys
}
