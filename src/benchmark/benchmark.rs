//! Timing harness for the two kernels.
//!
//! Each driver times its kernel with `Instant`, then writes the
//! reference-format report lines to the given sink. The elapsed time is the
//! wall clock truncated to whole milliseconds.

use std::io::{self, Write};
use std::time::Instant;

use crate::pidigits::spigot::pi_digit;
use crate::simulation::engine::run;
use crate::simulation::params::Parameters;

/// Run the n-body benchmark and report it.
///
/// "Initial" comes from an independent zero-step run, "Result" from the
/// full run; both constructions are timed together. The extra space after
/// "Result:" aligns the two columns.
pub fn bench_nbody<W: Write>(out: &mut W, params: &Parameters) -> io::Result<()> {
    let t0 = Instant::now();
    let initial = run(0, params.dt);
    let result = run(params.steps, params.dt);
    let elapsed = t0.elapsed().as_millis();

    writeln!(out, "Time: {} ms", elapsed)?;
    writeln!(out, "Initial: {:.16}", initial)?;
    writeln!(out, "Result:  {:.16}", result)
}

/// Run the pi-digit benchmark and report it.
pub fn bench_pi_digit<W: Write>(out: &mut W, digits: u64) -> io::Result<()> {
    let t0 = Instant::now();
    let result = pi_digit(digits);
    let elapsed = t0.elapsed().as_millis();

    writeln!(out, "Time: {} ms", elapsed)?;
    writeln!(out, "Result: {}", result)
}
