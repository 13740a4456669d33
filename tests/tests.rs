use numbench::{
    bench_nbody, initial_system, leapfrog_step, pi_digit, run, total_energy, Parameters,
};

use num_bigint::BigInt;

// Pinned outputs of the reference configuration (dt = 0.01)
const E_INITIAL: f64 = -0.1690751638285245;
const E_AFTER_1000: f64 = -0.16908760523460598;
const E_AFTER_100000: f64 = -0.1690798593916806;

const TOL: f64 = 1e-9;

/// Advance a fresh system `steps` times and return its energy
fn energy_after(steps: u32, dt: f64) -> f64 {
    let mut sys = initial_system();
    for _ in 0..steps {
        leapfrog_step(&mut sys, dt);
    }
    total_energy(&sys)
}

// ==================================================================================
// Initialization tests
// ==================================================================================

#[test]
fn momentum_vanishes_after_offset() {
    let p = initial_system().momentum();

    assert!(p.x.abs() < TOL, "px not zero: {}", p.x);
    assert!(p.y.abs() < TOL, "py not zero: {}", p.y);
    assert!(p.z.abs() < TOL, "pz not zero: {}", p.z);
}

#[test]
fn momentum_conserved_across_steps() {
    // pairwise kicks are equal and opposite, so the center of mass stays put
    let mut sys = initial_system();
    for _ in 0..100 {
        leapfrog_step(&mut sys, 0.01);
    }
    let p = sys.momentum();

    assert!(p.x.abs() < TOL, "px drifted: {}", p.x);
    assert!(p.y.abs() < TOL, "py drifted: {}", p.y);
    assert!(p.z.abs() < TOL, "pz drifted: {}", p.z);
}

#[test]
fn initial_energy_matches_reference() {
    let e = total_energy(&initial_system());
    assert!((e - E_INITIAL).abs() < TOL, "initial energy off: {}", e);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn energy_after_thousand_steps() {
    let e = energy_after(1000, 0.01);
    assert!((e - E_AFTER_1000).abs() < TOL, "1000-step energy off: {}", e);
}

#[test]
fn energy_after_reference_run() {
    let e = energy_after(100_000, 0.01);
    assert!((e - E_AFTER_100000).abs() < TOL, "final energy off: {}", e);
}

#[test]
fn advance_is_deterministic() {
    let mut s1 = initial_system();
    let mut s2 = s1.clone();

    leapfrog_step(&mut s1, 0.01);
    leapfrog_step(&mut s2, 0.01);

    // bit-identical, not merely close
    assert_eq!(s1, s2);
}

#[test]
fn half_steps_do_not_compose_to_a_full_step() {
    let mut halves = initial_system();
    leapfrog_step(&mut halves, 0.005);
    leapfrog_step(&mut halves, 0.005);

    let mut full = initial_system();
    leapfrog_step(&mut full, 0.01);

    // the pairwise kicks couple through the updated velocities, so two
    // half steps land somewhere else than one full step
    assert_ne!(halves, full);
}

#[test]
fn zero_steps_returns_initial_energy() {
    assert_eq!(run(0, 0.01), total_energy(&initial_system()));
}

// ==================================================================================
// Report format tests
// ==================================================================================

#[test]
fn nbody_report_format() {
    let params = Parameters { dt: 0.01, steps: 0 };
    let mut out = Vec::new();
    bench_nbody(&mut out, &params).unwrap();

    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();

    let time = lines.next().unwrap();
    assert!(time.starts_with("Time: "), "bad time line: {}", time);
    assert!(time.ends_with(" ms"), "bad time line: {}", time);
    let ms = &time["Time: ".len()..time.len() - " ms".len()];
    assert!(ms.parse::<u64>().is_ok(), "time not integral: {}", time);

    let initial = lines.next().unwrap();
    assert!(initial.starts_with("Initial: -0.16907516"), "{}", initial);
    let frac = initial.rsplit('.').next().unwrap();
    assert_eq!(frac.len(), 16, "expected 16 fractional digits: {}", initial);

    // double space after "Result:" for column alignment
    let result = lines.next().unwrap();
    assert!(result.starts_with("Result:  -0.16907516"), "{}", result);

    assert_eq!(lines.next(), None);
}

// ==================================================================================
// Pi spigot tests
// ==================================================================================

#[test]
fn pi_digit_matches_leading_digits() {
    let expected = [(1u64, 3), (2, 1), (3, 4), (5, 5), (10, 3), (27, 8)];
    for (position, digit) in expected {
        assert_eq!(
            pi_digit(position),
            BigInt::from(digit),
            "digit {} of pi wrong",
            position
        );
    }
}

#[test]
fn pi_digit_matches_deeper_positions() {
    assert_eq!(pi_digit(50), BigInt::from(1));
    assert_eq!(pi_digit(100), BigInt::from(7));
    assert_eq!(pi_digit(1000), BigInt::from(8));
}
