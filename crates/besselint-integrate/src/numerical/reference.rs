//! Quadrature of xⁿ jₗ(ax) jₗ(bx).

use besselint_special_func::spherical_jn_f64;

use super::adaptive::{adaptive_integrate, AdaptiveResult};
use super::gauss_kronrod::GaussKronrodRule;

/// Returns the integrand x ↦ xⁿ jₗ(ax) jₗ(bx) in double precision.
pub fn bessel_integrand(n: u32, l: u32, a: f64, b: f64) -> impl Fn(f64) -> f64 {
    let power = i32::try_from(n).unwrap_or(i32::MAX);
    move |x| x.powi(power) * spherical_jn_f64(l, a * x) * spherical_jn_f64(l, b * x)
}

/// Integrates xⁿ jₗ(ax) jₗ(bx) over [lower, upper] by adaptive G7K15
/// quadrature, to absolute and relative tolerance `tol`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn reference_integral(
    n: u32,
    l: u32,
    a: f64,
    b: f64,
    lower: f64,
    upper: f64,
    tol: f64,
    max_subdivisions: usize,
) -> AdaptiveResult {
    let integrand = bessel_integrand(n, l, a, b);
    adaptive_integrate(
        &integrand,
        &GaussKronrodRule::g7k15(),
        lower,
        upper,
        tol,
        tol,
        max_subdivisions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrand_values() {
        let f = bessel_integrand(2, 0, 1.0, 2.0);
        let x: f64 = 1.5;
        let expected = x * x * (x.sin() / x) * ((2.0 * x).sin() / (2.0 * x));
        assert!((f(x) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_matches_elementary_case() {
        // x² j₀(ax) j₀(bx) = sin(ax) sin(bx) / (ab)
        let (a, b) = (0.7, 1.9);
        let exact = |x: f64| {
            (((a - b) * x).sin() / (a - b) - ((a + b) * x).sin() / (a + b)) / (2.0 * a * b)
        };
        let result = reference_integral(2, 0, a, b, 1.0, 6.0, 1e-12, 1000);
        assert!(result.converged);
        assert!((result.value - (exact(6.0) - exact(1.0))).abs() < 1e-11);
    }

    #[test]
    fn test_high_order_reference() {
        // ∫₁⁶ x⁶ j₁₀(0.7x) j₁₀(1.9x) dx
        let result = reference_integral(6, 10, 0.7, 1.9, 1.0, 6.0, 1e-13, 1000);
        assert!((result.value - 0.122_294_237_533_711_64).abs() < 1e-11);
    }
}
