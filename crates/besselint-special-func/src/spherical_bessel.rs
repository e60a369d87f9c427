//! Spherical Bessel functions of the first kind.
//!
//! jₗ(z) = √(π/2z) J_{l+½}(z), with the elementary closed forms
//!
//! - j₀(z) = sin z / z
//! - j₁(z) = sin z / z² − cos z / z
//!
//! and the three-term recurrence jₗ₊₁(z) = (2l+1)/z · jₗ(z) − jₗ₋₁(z).
//! Continuing the recurrence one step down gives j₋₁(z) = cos z / z.
//!
//! # Evaluation strategy
//!
//! The upward recurrence is stable while |z| ≥ l and loses roughly
//! l·log₁₀(l/|z|) digits below that. For |z| < l+1 the ascending series
//!
//! jₗ(z) = zˡ/(2l+1)!! · Σₖ (−z²/2)ᵏ / (k! (2l+3)(2l+5)⋯(2l+2k+1))
//!
//! is used instead; its terms peak below (l+1)²/(2l+3) in magnitude, so
//! nothing significant cancels there.

use besselint_numeric::{Arithmetic, Real};

const MAX_SERIES_TERMS: u64 = 100_000;

/// Computes jₗ(z) at the working precision of `ar`.
///
/// jₗ(0) is 1 for l = 0 and 0 otherwise.
#[must_use]
pub fn spherical_jn(l: u32, z: &Real, ar: &Arithmetic) -> Real {
    if z.is_zero() {
        return if l == 0 { ar.one() } else { ar.zero() };
    }
    if l > 0 && z.abs() < ar.from_u64(u64::from(l) + 1) {
        return series(l, z, ar);
    }
    upward(l, z, ar).1
}

/// Computes the pair (jₗ₋₁(z), jₗ(z)), where j₋₁(z) = cos z / z.
///
/// `z` must be non-zero: j₋₁ is singular at the origin.
#[must_use]
pub fn spherical_jn_pair(l: u32, z: &Real, ar: &Arithmetic) -> (Real, Real) {
    if l > 0 && z.abs() < ar.from_u64(u64::from(l) + 1) {
        let lower = if l == 1 {
            ar.div(&ar.sin(z), z)
        } else {
            spherical_jn(l - 1, z, ar)
        };
        return (lower, series(l, z, ar));
    }
    upward(l, z, ar)
}

/// Computes j₋₁(z) = cos z / z.
#[must_use]
pub fn spherical_jn_minus_one(z: &Real, ar: &Arithmetic) -> Real {
    ar.div(&ar.cos(z), z)
}

/// Runs the recurrence from (j₋₁, j₀) up to (jₗ₋₁, jₗ).
fn upward(l: u32, z: &Real, ar: &Arithmetic) -> (Real, Real) {
    let mut previous = spherical_jn_minus_one(z, ar);
    let mut current = ar.div(&ar.sin(z), z);
    for k in 0..l {
        let factor = ar.div(&ar.from_u64(2 * u64::from(k) + 1), z);
        let next = ar.sub(&ar.mul(&factor, &current), &previous);
        previous = current;
        current = next;
    }
    (previous, current)
}

/// Ascending power series, for |z| below the turning point.
fn series(l: u32, z: &Real, ar: &Arithmetic) -> Real {
    let l = u64::from(l);
    let z2 = ar.mul(z, z);
    let step = ar.div(&z2.neg(), &ar.from_u64(2));
    let precision_bits = i64::try_from(ar.precision().bits()).unwrap_or(i64::MAX);

    let mut term = ar.one();
    let mut sum = ar.one();
    for k in 1..=MAX_SERIES_TERMS {
        let denominator = ar.from_u64(k * (2 * l + 2 * k + 1));
        term = ar.div(&ar.mul(&term, &step), &denominator);
        if term.is_zero() {
            break;
        }
        sum = ar.add(&sum, &term);
        let negligible = match (term.exponent(), sum.exponent()) {
            (Some(t), Some(s)) => i64::from(t) < i64::from(s) - precision_bits - 4,
            _ => false,
        };
        if negligible {
            break;
        }
    }

    let mut double_factorial = ar.one();
    for odd in (1..=2 * l + 1).step_by(2) {
        double_factorial = ar.mul(&double_factorial, &ar.from_u64(odd));
    }
    let leading = ar.div(&ar.powi(z, i64::try_from(l).unwrap_or(i64::MAX)), &double_factorial);
    ar.mul(&leading, &sum)
}

/// Computes jₗ(z) in double precision.
///
/// Same strategy as [`spherical_jn`]; used where a cheap, ~15 digit value is
/// enough, such as quadrature of the integrand.
#[must_use]
pub fn spherical_jn_f64(l: u32, z: f64) -> f64 {
    if z == 0.0 {
        return if l == 0 { 1.0 } else { 0.0 };
    }
    if l > 0 && z.abs() < f64::from(l) + 1.0 {
        return series_f64(l, z);
    }
    upward_f64(l, z).1
}

/// Computes the pair (jₗ₋₁(z), jₗ(z)) in double precision.
#[must_use]
pub fn spherical_jn_pair_f64(l: u32, z: f64) -> (f64, f64) {
    if l > 0 && z.abs() < f64::from(l) + 1.0 {
        let lower = if l == 1 { z.sin() / z } else { spherical_jn_f64(l - 1, z) };
        return (lower, series_f64(l, z));
    }
    upward_f64(l, z)
}

fn upward_f64(l: u32, z: f64) -> (f64, f64) {
    let mut previous = z.cos() / z;
    let mut current = z.sin() / z;
    for k in 0..l {
        let next = f64::from(2 * k + 1) / z * current - previous;
        previous = current;
        current = next;
    }
    (previous, current)
}

#[allow(clippy::cast_precision_loss)]
fn series_f64(l: u32, z: f64) -> f64 {
    let order = f64::from(l);
    let step = -z * z / 2.0;

    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 1..=MAX_SERIES_TERMS {
        let k = k as f64;
        term *= step / (k * (2.0 * order + 2.0 * k + 1.0));
        sum += term;
        if term.abs() <= f64::EPSILON * sum.abs() * 0.5 {
            break;
        }
    }

    // zˡ/(2l+1)!! built factor by factor to stay in range.
    let mut leading = 1.0 / (2.0 * order + 1.0);
    for i in 0..l {
        leading *= z / f64::from(2 * i + 1);
    }
    leading * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference values computed independently to 25 significant digits.
    const REFERENCE: &[(u32, &str, f64)] = &[
        (0, "0.5", 0.958_851_077_208_406_0),
        (1, "1e-4", 3.333_333_330_000_000_0e-5),
        (3, "2.5", 0.103_920_469_702_403_94),
        (5, "12.0", -0.067_444_795_960_268_36),
        (10, "3.0", 3.526_003_893_175_256_3e-6),
        (10, "40.0", 0.013_124_803_182_748_326),
        (2, "50000", 1.999_682_521_050_678_7e-5),
    ];

    fn arith() -> Arithmetic {
        Arithmetic::with_digits(50).expect("valid precision")
    }

    fn assert_rel(actual: f64, expected: f64, tol: f64) {
        let rel = ((actual - expected) / expected).abs();
        assert!(rel < tol, "actual {actual}, expected {expected}, rel {rel}");
    }

    #[test]
    fn test_reference_values_arbitrary_precision() {
        let ar = arith();
        for &(l, z, expected) in REFERENCE {
            let z = ar.parse(z).unwrap();
            assert_rel(spherical_jn(l, &z, &ar).to_f64(), expected, 1e-14);
        }
    }

    #[test]
    fn test_reference_values_f64() {
        for &(l, z, expected) in REFERENCE {
            let z: f64 = z.parse().unwrap();
            assert_rel(spherical_jn_f64(l, z), expected, 1e-11);
        }
    }

    #[test]
    fn test_at_origin() {
        let ar = arith();
        assert_eq!(spherical_jn(0, &ar.zero(), &ar).to_f64(), 1.0);
        assert!(spherical_jn(4, &ar.zero(), &ar).is_zero());
        assert_eq!(spherical_jn_f64(0, 0.0), 1.0);
        assert_eq!(spherical_jn_f64(3, 0.0), 0.0);
    }

    #[test]
    fn test_series_and_recurrence_agree_at_switch() {
        // Just below and above the switch point for l = 6.
        let ar = arith();
        for z in ["6.999", "7.001"] {
            let z = ar.parse(z).unwrap();
            let via_series = series(6, &z, &ar).to_f64();
            let via_recurrence = upward(6, &z, &ar).1.to_f64();
            assert_rel(via_series, via_recurrence, 1e-13);
        }
    }

    #[test]
    fn test_parity() {
        // jₗ(−z) = (−1)ˡ jₗ(z)
        let ar = arith();
        let z = ar.parse("3.7").unwrap();
        for l in 0..6 {
            let pos = spherical_jn(l, &z, &ar).to_f64();
            let neg = spherical_jn(l, &z.neg(), &ar).to_f64();
            let sign = if l % 2 == 0 { 1.0 } else { -1.0 };
            assert_rel(neg, sign * pos, 1e-14);
        }
    }

    #[test]
    fn test_pair_matches_single_evaluations() {
        let ar = arith();
        for z in ["0.3", "2.2", "19.0"] {
            let z = ar.parse(z).unwrap();
            let (lower, upper) = spherical_jn_pair(4, &z, &ar);
            assert_rel(lower.to_f64(), spherical_jn(3, &z, &ar).to_f64(), 1e-14);
            assert_rel(upper.to_f64(), spherical_jn(4, &z, &ar).to_f64(), 1e-14);
        }
        let z = ar.parse("1.5").unwrap();
        let (minus_one, zero) = spherical_jn_pair(0, &z, &ar);
        assert_rel(minus_one.to_f64(), 1.5f64.cos() / 1.5, 1e-14);
        assert_rel(zero.to_f64(), 1.5f64.sin() / 1.5, 1e-14);
    }

    #[test]
    fn test_pair_f64_matches_arbitrary_precision() {
        let ar = arith();
        for l in [0, 1, 4, 10] {
            for z in ["0.3", "2.2", "19.0"] {
                let (lower, upper) = spherical_jn_pair(l, &ar.parse(z).unwrap(), &ar);
                let (lower_f64, upper_f64) = spherical_jn_pair_f64(l, z.parse().unwrap());
                assert_rel(lower_f64, lower.to_f64(), 1e-11);
                assert_rel(upper_f64, upper.to_f64(), 1e-11);
            }
        }
    }

    #[test]
    fn test_small_argument_keeps_precision() {
        // j₁₀(10⁻⁵) ≈ z¹⁰/21!! where the recurrence would lose everything.
        let ar = arith();
        let z = ar.parse("1e-5").unwrap();
        let value = spherical_jn(10, &z, &ar).to_f64();
        let expected = 1e-50 / 13_749_310_575.0;
        assert_rel(value, expected, 1e-9);
    }
}
