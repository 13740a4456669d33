//! Streaming spigot for digits of pi.
//!
//! Continued-fraction digit extraction over arbitrary-precision integers.
//! The accumulator `a` goes negative in the first few iterations, so the
//! state uses signed `BigInt` throughout; every division and remainder runs
//! on positive operands, where truncated and Euclidean semantics agree.

use num_bigint::BigInt;

/// Compute the `digits`-th digit of pi, counting the leading 3 as digit 1.
///
/// One term of the continued fraction is folded per iteration; a digit
/// candidate `t` is accepted (and the countdown decremented) only once the
/// tail of the fraction can no longer change it. The last accepted digit is
/// the result.
pub fn pi_digit(digits: u64) -> BigInt {
    let mut remaining = digits;
    let mut k: u64 = 0;
    let mut l: u64 = 1;
    let mut n = BigInt::from(1u32);
    let mut a = BigInt::from(0u32);
    let mut d = BigInt::from(1u32);
    let mut t = BigInt::from(0u32);

    while remaining != 0 {
        k += 1;
        let t1 = &n << 1u32; // 2n
        let n1 = &n * k;
        let a1 = &a + &t1;
        l += 2;
        let a2 = &a1 * l;
        let d1 = &d * l;

        if a2 >= n1 {
            let tmp = &n1 * 3u32 + &a2;
            let t2 = &tmp / &d1;
            let u1 = &tmp % &d1 + &n1;

            if d1 > u1 {
                // digit settled: emit, scale the remainder back up
                remaining -= 1;
                a = (&a2 - &d1 * &t2) * 10u32;
                n = &n1 * 10u32;
            } else {
                a = a2;
                n = n1;
            }
            t = t2;
        } else {
            t = t1;
            a = a2;
            n = n1;
        }
        d = d1;
    }

    t
}
