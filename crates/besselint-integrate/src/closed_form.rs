//! Direct antiderivative for n = 2.
//!
//! For every order l ≥ 0,
//!
//! ```text
//! ∫ x² jₗ(ax) jₗ(bx) dx = x²/(a² − b²) · [ b·jₗ(ax)·jₗ₋₁(bx) − a·jₗ₋₁(ax)·jₗ(bx) ]
//! ```
//!
//! with j₋₁(z) = cos z / z. The two products are certified like the four
//! components of a tabulated expression.

use besselint_numeric::Real;
use besselint_special_func::spherical_jn_pair;
use tracing::instrument;

use crate::context::EvaluationContext;
use crate::error::{IntegralError, IntegralResult};
use crate::guard::{Antiderivative, PrecisionGuard};

/// Evaluates the n = 2 antiderivative at `x`.
///
/// # Errors
///
/// Returns [`IntegralError::DegenerateInputs`] if `x ≤ 0`, `a² = b²` or
/// either scale is zero, and [`IntegralError::InsufficientPrecision`] if the
/// two products cancel beyond the guard's policy.
#[instrument(level = "debug", skip_all, fields(n = 2, l = l))]
pub fn quadratic_antiderivative(
    l: u32,
    x: &Real,
    ctx: &EvaluationContext<'_>,
    guard: &PrecisionGuard,
) -> IntegralResult<Antiderivative> {
    let ar = ctx.arithmetic();
    if !x.is_positive() {
        return Err(IntegralError::DegenerateInputs("x must be positive"));
    }
    if ctx.ab().is_zero() {
        return Err(IntegralError::DegenerateInputs("a and b must be non-zero"));
    }
    let denominator = ar.sub(ctx.a_squared(), ctx.b_squared());
    if denominator.is_zero() {
        return Err(IntegralError::DegenerateInputs("a² and b² must differ"));
    }

    let (a_lower, a_order) = spherical_jn_pair(l, &ar.mul(ctx.a(), x), ar);
    let (b_lower, b_order) = spherical_jn_pair(l, &ar.mul(ctx.b(), x), ar);
    let scale = ar.div(&ar.mul(x, x), &denominator);

    let components = [
        ar.mul(&scale, &ar.mul(ctx.b(), &ar.mul(&a_order, &b_lower))),
        ar.mul(&scale, &ar.mul(ctx.a(), &ar.mul(&a_lower, &b_order))).neg(),
    ];
    guard.certify(&components, ar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use besselint_numeric::Arithmetic;

    fn definite(l: u32, ar: &Arithmetic) -> f64 {
        let ctx = EvaluationContext::new(ar.parse("0.7").unwrap(), ar.parse("1.9").unwrap(), ar);
        let guard = PrecisionGuard::new(13);
        let upper = quadratic_antiderivative(l, &ar.from_i64(6), &ctx, &guard).unwrap();
        let lower = quadratic_antiderivative(l, &ar.one(), &ctx, &guard).unwrap();
        ar.sub(&upper.value, &lower.value).to_f64()
    }

    #[test]
    fn test_reference_integrals() {
        let ar = Arithmetic::with_digits(50).expect("valid precision");
        let cases = [
            (0, 0.015_607_779_776_295_794),
            (1, 0.166_832_006_399_071_2),
            (3, -0.213_135_044_380_697_1),
            (7, 0.012_804_767_033_999_767),
        ];
        for (l, expected) in cases {
            let actual = definite(l, &ar);
            assert!(
                (actual - expected).abs() < 1e-14 * expected.abs().max(1.0),
                "l = {l}: {actual} vs {expected}"
            );
        }
    }

    #[test]
    fn test_rejects_degenerate_inputs() {
        let ar = Arithmetic::with_digits(30).expect("valid precision");
        let guard = PrecisionGuard::new(13);
        let x = ar.one();
        for (a, b) in [(2, 2), (2, -2), (0, 1)] {
            let ctx = EvaluationContext::new(ar.from_i64(a), ar.from_i64(b), &ar);
            assert!(matches!(
                quadratic_antiderivative(1, &x, &ctx, &guard),
                Err(IntegralError::DegenerateInputs(_))
            ));
        }
        let ctx = EvaluationContext::new(ar.from_i64(1), ar.from_i64(2), &ar);
        assert!(matches!(
            quadratic_antiderivative(1, &ar.zero(), &ctx, &guard),
            Err(IntegralError::DegenerateInputs(_))
        ));
    }
}
