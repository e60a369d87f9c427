//! Terms and parts of a closed-form antiderivative.
//!
//! A [`Term`] is
//!
//! ```text
//! c · x^p · (ab)^m · Σₖ wₖ · a^(2(K-1-k)) b^(2k)
//! ```
//!
//! with an integer coefficient `c`, an exponent `p` that may be negative or
//! fractional, a non-negative `m`, and integer weights `w` of length `K`.
//! A [`Part`] is an ordered sum of terms.

use std::fmt;

use besselint_numeric::Real;
use smallvec::SmallVec;

use crate::context::EvaluationContext;

/// Power of x carried by a term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exponent {
    /// An integer power, computed exactly by repeated squaring.
    Integer(i32),
    /// A rational power p/q, computed with the general real power.
    Rational {
        /// Numerator p.
        numerator: i32,
        /// Denominator q, never zero.
        denominator: u32,
    },
}

impl Exponent {
    /// Creates a rational exponent, reducing to [`Exponent::Integer`] when
    /// `denominator` divides `numerator`.
    ///
    /// Returns `None` for a zero denominator.
    #[must_use]
    pub fn rational(numerator: i32, denominator: u32) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let divisor = i64::from(denominator);
        if i64::from(numerator) % divisor == 0 {
            let quotient = i64::from(numerator) / divisor;
            return i32::try_from(quotient).ok().map(Exponent::Integer);
        }
        Some(Exponent::Rational {
            numerator,
            denominator,
        })
    }

    /// Returns true for the zero exponent.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Exponent::Integer(0))
    }

    /// Returns `x` raised to this exponent.
    #[must_use]
    pub fn apply(&self, x: &Real, ctx: &EvaluationContext<'_>) -> Real {
        let ar = ctx.arithmetic();
        match *self {
            Exponent::Integer(p) => ar.powi(x, i64::from(p)),
            Exponent::Rational {
                numerator,
                denominator,
            } => {
                let exponent = ar.div(
                    &ar.from_i64(i64::from(numerator)),
                    &ar.from_u64(u64::from(denominator)),
                );
                ar.pow(x, &exponent)
            }
        }
    }
}

impl From<i32> for Exponent {
    fn from(p: i32) -> Self {
        Exponent::Integer(p)
    }
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exponent::Integer(p) => write!(f, "{p}"),
            Exponent::Rational {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
        }
    }
}

/// Weight vectors in the tables have at most six entries.
type Weights = SmallVec<[i64; 8]>;

/// One term `c · x^p · (ab)^m · poly(a², b²)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Term {
    coefficient: i64,
    x_power: Exponent,
    ab_power: u32,
    weights: Weights,
}

impl Term {
    /// Creates a term with an integer power of x.
    ///
    /// An empty `weights` slice means the single weight `[1]`.
    #[must_use]
    pub fn new(coefficient: i64, x_power: i32, ab_power: u32, weights: &[i64]) -> Self {
        Self::with_exponent(coefficient, Exponent::Integer(x_power), ab_power, weights)
    }

    /// Creates a term with an arbitrary power of x.
    #[must_use]
    pub fn with_exponent(
        coefficient: i64,
        x_power: Exponent,
        ab_power: u32,
        weights: &[i64],
    ) -> Self {
        let weights = if weights.is_empty() {
            SmallVec::from_slice(&[1])
        } else {
            SmallVec::from_slice(weights)
        };
        Self {
            coefficient,
            x_power,
            ab_power,
            weights,
        }
    }

    /// Returns the integer coefficient.
    #[must_use]
    pub fn coefficient(&self) -> i64 {
        self.coefficient
    }

    /// Returns the power of x.
    #[must_use]
    pub fn x_power(&self) -> Exponent {
        self.x_power
    }

    /// Returns the power of ab.
    #[must_use]
    pub fn ab_power(&self) -> u32 {
        self.ab_power
    }

    /// Returns the polynomial weights.
    #[must_use]
    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    /// Evaluates the term at `x`, which must be positive.
    #[must_use]
    pub fn evaluate(&self, x: &Real, ctx: &EvaluationContext<'_>) -> Real {
        let ar = ctx.arithmetic();
        let mut value = ar.mul(&ar.from_i64(self.coefficient), &self.x_power.apply(x, ctx));
        if self.ab_power != 0 {
            value = ar.mul(&value, &ar.powi(ctx.ab(), i64::from(self.ab_power)));
        }
        ar.mul(&value, &ctx.weighted_sum(&self.weights))
    }
}

/// An ordered sum of terms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Part {
    terms: Vec<Term>,
}

impl Part {
    /// Creates a part from its terms.
    #[must_use]
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Returns the terms.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true if the part has no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluates the part at `x`. An empty part is zero.
    #[must_use]
    pub fn evaluate(&self, x: &Real, ctx: &EvaluationContext<'_>) -> Real {
        let ar = ctx.arithmetic();
        self.terms
            .iter()
            .fold(ar.zero(), |acc, term| ar.add(&acc, &term.evaluate(x, ctx)))
    }
}

impl FromIterator<Term> for Part {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
