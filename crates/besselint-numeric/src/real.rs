//! Arbitrary precision real numbers.
//!
//! `Real` carries no precision of its own beyond the mantissa it was rounded
//! to. Anything that rounds goes through [`Arithmetic`](crate::Arithmetic);
//! the operations here are exact.

use astro_float::BigFloat;
use std::cmp::Ordering;
use std::fmt;

/// An arbitrary precision real number.
#[derive(Clone, PartialEq, PartialOrd)]
pub struct Real(BigFloat);

impl Real {
    /// Wraps a backend value.
    #[must_use]
    pub fn from_inner(value: BigFloat) -> Self {
        Self(value)
    }

    /// Returns the inner `astro_float::BigFloat`.
    #[must_use]
    pub fn into_inner(self) -> BigFloat {
        self.0
    }

    /// Returns a reference to the inner `astro_float::BigFloat`.
    #[must_use]
    pub fn as_inner(&self) -> &BigFloat {
        &self.0
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the negation.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self(self.0.neg())
    }

    /// Returns the largest integer not greater than this value.
    #[must_use]
    pub fn floor(&self) -> Self {
        Self(self.0.floor())
    }

    /// Returns true if zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.0.is_zero() && self.0.is_negative()
    }

    /// Returns true if strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_positive()
    }

    /// Returns true if neither NaN nor infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        !self.0.is_nan() && !self.0.is_inf()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns the binary exponent `e` such that `|self| = 0.m × 2^e`, or
    /// `None` for zero and non-finite values.
    #[must_use]
    pub fn exponent(&self) -> Option<i32> {
        if self.is_zero() || !self.is_finite() {
            return None;
        }
        self.0.exponent()
    }

    /// Converts to the `f64` nearest the leading 64 bits of the mantissa.
    ///
    /// Values beyond the `f64` range saturate to infinity or flush to zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        let Some((words, _, sign, exponent, _)) = self.0.as_raw_parts() else {
            return if self.0.is_nan() {
                f64::NAN
            } else if self.0.is_inf_neg() {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        };

        // Normalised mantissa: the top word holds the leading 64 bits.
        let top = match words.last() {
            Some(&w) if w != 0 => w,
            _ => return 0.0,
        };
        // Scale in two halves so that 2^exponent itself never overflows while
        // the product is still finite.
        let half = exponent / 2;
        let magnitude = (top as f64 * 2f64.powi(-64)) * 2f64.powi(half) * 2f64.powi(exponent - half);

        if sign.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl PartialEq<f64> for Real {
    fn eq(&self, other: &f64) -> bool {
        self.to_f64() == *other
    }
}

impl PartialOrd<f64> for Real {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.to_f64().partial_cmp(other)
    }
}

impl fmt::Debug for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Real({})", self.0)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
