pub mod simulation;
pub mod pidigits;
pub mod benchmark;

pub use simulation::states::{Body, SolarSystem, NVec3, SUN, JUPITER, SATURN, URANUS, NEPTUNE, PAIRS};
pub use simulation::forces::accumulate_kicks;
pub use simulation::integrator::leapfrog_step;
pub use simulation::energy::total_energy;
pub use simulation::scenario::{initial_system, SOLAR_MASS, DAYS_PER_YEAR};
pub use simulation::engine::run;
pub use simulation::params::Parameters;

pub use pidigits::spigot::pi_digit;

pub use benchmark::benchmark::{bench_nbody, bench_pi_digit};
