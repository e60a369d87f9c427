//! Arithmetic context.
//!
//! Every rounding operation takes the working precision and rounding mode
//! from the context, so values computed through one `Arithmetic` are
//! consistent with each other.
//!
//! The backend keeps a cache of mathematical constants (π, ln 2, ...) that is
//! mutated on first use at a given precision. The cache lives in a `RefCell`,
//! which makes `Arithmetic` `!Sync`: use one per thread or per evaluation.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;

use astro_float::{BigFloat, Consts, Radix, RoundingMode};

use crate::{NumericError, Real, WorkingPrecision};

/// Performs arithmetic on [`Real`] values at a fixed working precision.
pub struct Arithmetic {
    precision: WorkingPrecision,
    rounding: RoundingMode,
    consts: RefCell<Consts>,
}

impl Arithmetic {
    /// Creates an arithmetic context for the given precision.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::ConstantsInit`] if the backend's constants
    /// cache cannot be allocated.
    pub fn new(precision: WorkingPrecision) -> Result<Self, NumericError> {
        let consts = Consts::new().map_err(|e| NumericError::ConstantsInit(e.to_string()))?;
        Ok(Self {
            precision,
            rounding: RoundingMode::ToEven,
            consts: RefCell::new(consts),
        })
    }

    /// Creates an arithmetic context carrying `digits` significant decimal digits.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` is zero or the constants cache fails.
    pub fn with_digits(digits: usize) -> Result<Self, NumericError> {
        Self::new(WorkingPrecision::new(digits)?)
    }

    /// Returns the working precision.
    #[must_use]
    pub fn precision(&self) -> WorkingPrecision {
        self.precision
    }

    /// Returns the working precision in decimal digits.
    #[must_use]
    pub fn digits(&self) -> usize {
        self.precision.digits()
    }

    fn bits(&self) -> usize {
        self.precision.bits()
    }

    // Construction

    /// Returns zero.
    #[must_use]
    pub fn zero(&self) -> Real {
        self.from_i64(0)
    }

    /// Returns one.
    #[must_use]
    pub fn one(&self) -> Real {
        self.from_i64(1)
    }

    /// Converts a signed integer exactly.
    #[must_use]
    pub fn from_i64(&self, value: i64) -> Real {
        Real::from_inner(BigFloat::from_i64(value, self.bits()))
    }

    /// Converts an unsigned integer exactly.
    #[must_use]
    pub fn from_u64(&self, value: u64) -> Real {
        Real::from_inner(BigFloat::from_u64(value, self.bits()))
    }

    /// Converts a double exactly (the binary value, not its decimal spelling).
    #[must_use]
    pub fn from_f64(&self, value: f64) -> Real {
        Real::from_inner(BigFloat::from_f64(value, self.bits()))
    }

    /// Parses a decimal literal such as `"0.01"` or `"-1.5e-3"`, rounding once
    /// to the working precision.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidLiteral`] if the text is not a finite
    /// decimal number.
    pub fn parse(&self, literal: &str) -> Result<Real, NumericError> {
        let trimmed = literal.trim();
        if trimmed.is_empty() {
            return Err(NumericError::InvalidLiteral(literal.to_string()));
        }
        let value = {
            let mut cc = self.consts.borrow_mut();
            BigFloat::parse(trimmed, Radix::Dec, self.bits(), self.rounding, &mut cc)
        };
        let value = Real::from_inner(value);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(NumericError::InvalidLiteral(literal.to_string()))
        }
    }

    // Field operations

    /// Returns `x + y`.
    #[must_use]
    pub fn add(&self, x: &Real, y: &Real) -> Real {
        Real::from_inner(x.as_inner().add(y.as_inner(), self.bits(), self.rounding))
    }

    /// Returns `x - y`.
    #[must_use]
    pub fn sub(&self, x: &Real, y: &Real) -> Real {
        Real::from_inner(x.as_inner().sub(y.as_inner(), self.bits(), self.rounding))
    }

    /// Returns `x * y`.
    #[must_use]
    pub fn mul(&self, x: &Real, y: &Real) -> Real {
        Real::from_inner(x.as_inner().mul(y.as_inner(), self.bits(), self.rounding))
    }

    /// Returns `x / y`.
    ///
    /// Division by zero yields a non-finite value; callers that can divide by
    /// zero check their divisors first.
    #[must_use]
    pub fn div(&self, x: &Real, y: &Real) -> Real {
        Real::from_inner(x.as_inner().div(y.as_inner(), self.bits(), self.rounding))
    }

    /// Returns `1 / x`.
    #[must_use]
    pub fn recip(&self, x: &Real) -> Real {
        self.div(&self.one(), x)
    }

    /// Returns the sum of all values, or zero for an empty sequence.
    pub fn sum<'r>(&self, values: impl IntoIterator<Item = &'r Real>) -> Real {
        values
            .into_iter()
            .fold(self.zero(), |acc, v| self.add(&acc, v))
    }

    // Powers

    /// Returns `x^n` for a signed integer exponent by repeated squaring.
    ///
    /// Valid for any sign of `x`. `x^0` is exactly one; negative exponents
    /// take the reciprocal of the positive power.
    #[must_use]
    pub fn powi(&self, x: &Real, n: i64) -> Real {
        if n == 0 {
            return self.one();
        }
        let magnitude = usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX);
        let power = Real::from_inner(x.as_inner().powi(magnitude, self.bits(), self.rounding));
        if n < 0 {
            self.recip(&power)
        } else {
            power
        }
    }

    /// Returns `x^y` for a real exponent.
    ///
    /// `x` must be positive unless `y` is an integer; use [`powi`](Self::powi)
    /// for integer exponents.
    #[must_use]
    pub fn pow(&self, x: &Real, y: &Real) -> Real {
        let mut cc = self.consts.borrow_mut();
        Real::from_inner(x.as_inner().pow(y.as_inner(), self.bits(), self.rounding, &mut cc))
    }

    /// Returns `√x`.
    #[must_use]
    pub fn sqrt(&self, x: &Real) -> Real {
        Real::from_inner(x.as_inner().sqrt(self.bits(), self.rounding))
    }

    // Transcendental functions

    /// Returns `sin x`.
    #[must_use]
    pub fn sin(&self, x: &Real) -> Real {
        let mut cc = self.consts.borrow_mut();
        Real::from_inner(x.as_inner().sin(self.bits(), self.rounding, &mut cc))
    }

    /// Returns `cos x`.
    #[must_use]
    pub fn cos(&self, x: &Real) -> Real {
        let mut cc = self.consts.borrow_mut();
        Real::from_inner(x.as_inner().cos(self.bits(), self.rounding, &mut cc))
    }

    /// Returns `ln x`.
    #[must_use]
    pub fn ln(&self, x: &Real) -> Real {
        let mut cc = self.consts.borrow_mut();
        Real::from_inner(x.as_inner().ln(self.bits(), self.rounding, &mut cc))
    }

    /// Returns `log₁₀ x` as `ln x / ln 10`.
    ///
    /// The backend's arbitrary-base logarithm does not terminate when the
    /// result is an exact integer such as `log₁₀ 100`.
    #[must_use]
    pub fn log10(&self, x: &Real) -> Real {
        self.div(&self.ln(x), &self.ln(&self.from_i64(10)))
    }

    /// Returns `⌊log₁₀ |x|⌋`, the decimal order of magnitude of `x`.
    ///
    /// The binary exponent gives an estimate within one of the answer, which
    /// is then settled by comparing against powers of ten, so exact powers of
    /// ten land on their own order.
    ///
    /// Returns `None` for zero and non-finite values, which have no order.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn order_of_magnitude(&self, x: &Real) -> Option<i64> {
        let exponent = x.exponent()?;
        let magnitude = x.abs();

        // |x| lies in [2^(e-1), 2^e).
        let mut order = ((f64::from(exponent) - 1.0) * std::f64::consts::LOG10_2).floor() as i64;
        while self.compare_with_power_of_ten(&magnitude, order) == Some(Ordering::Less) {
            order -= 1;
        }
        while matches!(
            self.compare_with_power_of_ten(&magnitude, order + 1),
            Some(Ordering::Greater | Ordering::Equal)
        ) {
            order += 1;
        }
        Some(order)
    }

    /// Compares a non-negative `magnitude` with `10^k`.
    ///
    /// Negative `k` scales the magnitude up instead of forming `10^k`, whose
    /// reciprocal is inexact.
    fn compare_with_power_of_ten(&self, magnitude: &Real, k: i64) -> Option<Ordering> {
        let ten = self.from_i64(10);
        if k >= 0 {
            magnitude.partial_cmp(&self.powi(&ten, k))
        } else {
            self.mul(magnitude, &self.powi(&ten, -k))
                .partial_cmp(&self.one())
        }
    }
}

impl fmt::Debug for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arithmetic")
            .field("precision", &self.precision)
            .field("rounding", &self.rounding)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arith(digits: usize) -> Arithmetic {
        Arithmetic::with_digits(digits).expect("valid precision")
    }

    fn close(x: &Real, expected: f64, tol: f64) -> bool {
        (x.to_f64() - expected).abs() <= tol * expected.abs().max(1.0)
    }

    #[test]
    fn test_field_operations() {
        let ar = arith(50);
        let x = ar.from_i64(7);
        let y = ar.from_i64(-3);
        assert_eq!(ar.add(&x, &y).to_f64(), 4.0);
        assert_eq!(ar.sub(&x, &y).to_f64(), 10.0);
        assert_eq!(ar.mul(&x, &y).to_f64(), -21.0);
        assert!(close(&ar.div(&x, &y), -7.0 / 3.0, 1e-15));
        assert!(close(&ar.recip(&y), -1.0 / 3.0, 1e-15));
    }

    #[test]
    fn test_parse_decimal_literal() {
        let ar = arith(50);
        let x = ar.parse("0.01").unwrap();
        let hundred = ar.from_i64(100);
        // 0.01 * 100 is one to working precision, unlike the binary double 0.01.
        let product = ar.mul(&x, &hundred);
        let diff = ar.sub(&product, &ar.one());
        assert!(diff.is_zero() || ar.order_of_magnitude(&diff).unwrap() < -45);
        assert!(close(&ar.parse("-1.5e-3").unwrap(), -1.5e-3, 1e-15));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let ar = arith(30);
        assert!(matches!(ar.parse(""), Err(NumericError::InvalidLiteral(_))));
        assert!(matches!(ar.parse("abc"), Err(NumericError::InvalidLiteral(_))));
    }

    #[test]
    fn test_powi_signs() {
        let ar = arith(40);
        let x = ar.from_i64(-2);
        assert_eq!(ar.powi(&x, 0).to_f64(), 1.0);
        assert_eq!(ar.powi(&x, 3).to_f64(), -8.0);
        assert_eq!(ar.powi(&x, 4).to_f64(), 16.0);
        assert_eq!(ar.powi(&x, -3).to_f64(), -0.125);
    }

    #[test]
    fn test_pow_fractional_exponent() {
        let ar = arith(40);
        let x = ar.from_i64(8);
        let third = ar.div(&ar.one(), &ar.from_i64(3));
        assert!(close(&ar.pow(&x, &third), 2.0, 1e-14));
        assert!(close(&ar.sqrt(&ar.from_i64(2)), std::f64::consts::SQRT_2, 1e-15));
    }

    #[test]
    fn test_trigonometry() {
        let ar = arith(60);
        let x = ar.parse("0.5").unwrap();
        assert!(close(&ar.sin(&x), 0.5f64.sin(), 1e-15));
        assert!(close(&ar.cos(&x), 0.5f64.cos(), 1e-15));
        // Large arguments keep full accuracy.
        let big = ar.from_i64(50_000);
        assert!(close(&ar.sin(&big), 50_000f64.sin(), 1e-10));
    }

    #[test]
    fn test_order_of_magnitude() {
        let ar = arith(50);
        assert_eq!(ar.order_of_magnitude(&ar.parse("1234.5").unwrap()), Some(3));
        assert_eq!(ar.order_of_magnitude(&ar.parse("-0.00731").unwrap()), Some(-3));
        assert_eq!(ar.order_of_magnitude(&ar.parse("5e-120").unwrap()), Some(-120));
        assert_eq!(ar.order_of_magnitude(&ar.zero()), None);
    }

    #[test]
    fn test_order_of_exact_powers_of_ten() {
        for digits in [20, 200] {
            let ar = arith(digits);
            for k in [0, 1, 2, 3, 5, 17] {
                let power = ar.powi(&ar.from_i64(10), k);
                assert_eq!(ar.order_of_magnitude(&power), Some(k), "10^{k}");
                assert_eq!(ar.order_of_magnitude(&power.neg()), Some(k), "-10^{k}");
                let below = ar.sub(&power, &ar.parse("1e-3").unwrap());
                assert_eq!(ar.order_of_magnitude(&below), Some(k - 1), "10^{k} - 0.001");
            }
            assert_eq!(ar.order_of_magnitude(&ar.parse("0.001").unwrap()), Some(-3));
            assert_eq!(ar.order_of_magnitude(&ar.parse("0.00099").unwrap()), Some(-4));
            assert_eq!(ar.order_of_magnitude(&ar.from_i64(1024)), Some(3));
        }
    }

    #[test]
    fn test_log10() {
        let ar = arith(40);
        assert!(close(&ar.log10(&ar.from_i64(100)), 2.0, 1e-15));
        assert!(close(&ar.log10(&ar.from_i64(1000)), 3.0, 1e-15));
        assert!(close(&ar.log10(&ar.parse("123.25").unwrap()), 123.25f64.log10(), 1e-15));
    }

    #[test]
    fn test_sum() {
        let ar = arith(30);
        let values: Vec<Real> = (1..=4).map(|i| ar.from_i64(i)).collect();
        assert_eq!(ar.sum(&values).to_f64(), 10.0);
        assert!(ar.sum(&[]).is_zero());
    }

    #[test]
    fn test_precision_is_carried() {
        let ar = arith(100);
        assert_eq!(ar.digits(), 100);
        let third = ar.div(&ar.one(), &ar.from_i64(3));
        let residual = ar.sub(&ar.mul(&third, &ar.from_i64(3)), &ar.one());
        assert!(residual.is_zero() || ar.order_of_magnitude(&residual).unwrap() < -95);
    }
}
