//! Evaluation context for one (a, b) pair.
//!
//! The context owns the scale parameters, their squares and product, and a
//! memo of the cross monomials
//!
//! ```text
//! m[k] = a^(2(n-1-k)) · b^(2k),   k = 0..n
//! ```
//!
//! that every polynomial weight in a closed form is dotted against. A context
//! is never updated in place: a new (a, b) gets a new context.

use std::cell::RefCell;
use std::rc::Rc;

use besselint_numeric::{Arithmetic, Real};
use rustc_hash::FxHashMap;
use tracing::trace;

/// Scale parameters and monomial cache for evaluating closed forms.
pub struct EvaluationContext<'ar> {
    ar: &'ar Arithmetic,
    a: Real,
    b: Real,
    a2: Real,
    b2: Real,
    ab: Real,
    monomials: RefCell<FxHashMap<usize, Rc<[Real]>>>,
}

impl<'ar> EvaluationContext<'ar> {
    /// Creates a context for the scale parameters `a` and `b`.
    #[must_use]
    pub fn new(a: Real, b: Real, ar: &'ar Arithmetic) -> Self {
        let a2 = ar.mul(&a, &a);
        let b2 = ar.mul(&b, &b);
        let ab = ar.mul(&a, &b);
        Self {
            ar,
            a,
            b,
            a2,
            b2,
            ab,
            monomials: RefCell::new(FxHashMap::default()),
        }
    }

    /// Returns the arithmetic this context computes with.
    #[must_use]
    pub fn arithmetic(&self) -> &'ar Arithmetic {
        self.ar
    }

    /// Returns a.
    #[must_use]
    pub fn a(&self) -> &Real {
        &self.a
    }

    /// Returns b.
    #[must_use]
    pub fn b(&self) -> &Real {
        &self.b
    }

    /// Returns a².
    #[must_use]
    pub fn a_squared(&self) -> &Real {
        &self.a2
    }

    /// Returns b².
    #[must_use]
    pub fn b_squared(&self) -> &Real {
        &self.b2
    }

    /// Returns a·b.
    #[must_use]
    pub fn ab(&self) -> &Real {
        &self.ab
    }

    /// Returns the `n` cross monomials a^(2(n-1-k))·b^(2k).
    ///
    /// `n = 0` is empty and `n = 1` is `[1]`. Each degree is computed once per
    /// context; later calls share the cached sequence.
    #[must_use]
    pub fn monomials(&self, n: usize) -> Rc<[Real]> {
        if let Some(cached) = self.monomials.borrow().get(&n) {
            return Rc::clone(cached);
        }
        trace!(degree = n, "monomial cache miss");
        let computed = self.build_monomials(n);
        self.monomials.borrow_mut().insert(n, Rc::clone(&computed));
        computed
    }

    fn build_monomials(&self, n: usize) -> Rc<[Real]> {
        let ar = self.ar;
        let mut a_powers = Vec::with_capacity(n);
        let mut b_powers = Vec::with_capacity(n);
        let (mut a_power, mut b_power) = (ar.one(), ar.one());
        for _ in 0..n {
            a_powers.push(a_power.clone());
            b_powers.push(b_power.clone());
            a_power = ar.mul(&a_power, &self.a2);
            b_power = ar.mul(&b_power, &self.b2);
        }
        a_powers
            .iter()
            .rev()
            .zip(&b_powers)
            .map(|(a_part, b_part)| ar.mul(a_part, b_part))
            .collect()
    }

    /// Returns Σ weights[k]·m[k] over the monomials of degree `weights.len()`.
    ///
    /// An empty weight vector sums to zero.
    #[must_use]
    pub fn weighted_sum(&self, weights: &[i64]) -> Real {
        let ar = self.ar;
        let monomials = self.monomials(weights.len());
        weights
            .iter()
            .zip(monomials.iter())
            .fold(ar.zero(), |acc, (&w, m)| {
                ar.add(&acc, &ar.mul(&ar.from_i64(w), m))
            })
    }

    /// Returns how many monomial degrees have been computed so far.
    #[must_use]
    pub fn cached_degrees(&self) -> usize {
        self.monomials.borrow().len()
    }
}

impl std::fmt::Debug for EvaluationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationContext")
            .field("a", &self.a)
            .field("b", &self.b)
            .field("cached_degrees", &self.cached_degrees())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arith() -> Arithmetic {
        Arithmetic::with_digits(40).expect("valid precision")
    }

    #[test]
    fn test_monomials_small_degrees() {
        let ar = arith();
        let ctx = EvaluationContext::new(ar.from_i64(2), ar.from_i64(3), &ar);
        assert!(ctx.monomials(0).is_empty());

        let one = ctx.monomials(1);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].to_f64(), 1.0);

        // a⁴, a²b², b⁴
        let three: Vec<f64> = ctx.monomials(3).iter().map(Real::to_f64).collect();
        assert_eq!(three, vec![16.0, 36.0, 81.0]);
    }

    #[test]
    fn test_monomials_are_cached() {
        let ar = arith();
        let ctx = EvaluationContext::new(ar.from_i64(2), ar.from_i64(5), &ar);
        assert_eq!(ctx.cached_degrees(), 0);
        let first = ctx.monomials(4);
        let second = ctx.monomials(4);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(ctx.cached_degrees(), 1);
        let _ = ctx.monomials(2);
        assert_eq!(ctx.cached_degrees(), 2);
    }

    #[test]
    fn test_weighted_sum() {
        let ar = arith();
        let ctx = EvaluationContext::new(ar.from_i64(2), ar.from_i64(3), &ar);
        // 3a⁴ + 32a²b² + 3b⁴ = 48 + 1152 + 243
        assert_eq!(ctx.weighted_sum(&[3, 32, 3]).to_f64(), 1443.0);
        // a² + b²
        assert_eq!(ctx.weighted_sum(&[1, 1]).to_f64(), 13.0);
        assert_eq!(ctx.weighted_sum(&[1]).to_f64(), 1.0);
        assert!(ctx.weighted_sum(&[]).is_zero());
    }

    #[test]
    fn test_derived_parameters() {
        let ar = arith();
        let ctx = EvaluationContext::new(ar.from_i64(-2), ar.from_i64(7), &ar);
        assert_eq!(ctx.a_squared().to_f64(), 4.0);
        assert_eq!(ctx.b_squared().to_f64(), 49.0);
        assert_eq!(ctx.ab().to_f64(), -14.0);
    }
}
