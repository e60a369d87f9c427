//! Adaptive Numerical Integration
//!
//! Global adaptive bisection: the interval with the largest error estimate is
//! split until the summed estimate meets the tolerance or the subdivision
//! budget runs out.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::gauss_kronrod::GaussKronrodRule;

/// Result of adaptive integration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdaptiveResult {
    /// Computed integral value
    pub value: f64,
    /// Estimated absolute error
    pub error: f64,
    /// Total number of function evaluations
    pub evaluations: usize,
    /// Number of subintervals used
    pub intervals: usize,
    /// Whether the tolerance was met
    pub converged: bool,
}

#[derive(Clone, Copy, Debug)]
struct Interval {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Interval {}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    // Max-heap by error.
    fn cmp(&self, other: &Self) -> Ordering {
        self.error.total_cmp(&other.error)
    }
}

/// Integrates `f` over [a, b] by adaptive bisection with `rule`.
///
/// The tolerance is `max(abs_tol, rel_tol · |value|)`. Running totals drift
/// in floating point, so the reported value and error are re-summed from the
/// final intervals.
///
/// # Example
///
/// ```
/// use besselint_integrate::numerical::{adaptive_integrate, GaussKronrodRule};
///
/// let result = adaptive_integrate(
///     &|x: f64| x.sin() / x,
///     &GaussKronrodRule::g7k15(),
///     0.001,
///     10.0,
///     1e-10,
///     1e-10,
///     1000,
/// );
/// assert!(result.converged);
/// ```
pub fn adaptive_integrate<F: Fn(f64) -> f64>(
    f: &F,
    rule: &GaussKronrodRule,
    a: f64,
    b: f64,
    abs_tol: f64,
    rel_tol: f64,
    max_subdivisions: usize,
) -> AdaptiveResult {
    let tolerance = |value: f64| abs_tol.max(rel_tol * value.abs());

    let initial = rule.integrate(f, a, b);
    let mut heap = BinaryHeap::new();
    heap.push(Interval {
        a,
        b,
        value: initial.value,
        error: initial.error,
    });

    let mut total_value = initial.value;
    let mut total_error = initial.error;
    let mut evaluations = initial.evaluations;

    for _ in 0..max_subdivisions {
        if total_error <= tolerance(total_value) {
            break;
        }
        let Some(worst) = heap.pop() else {
            break;
        };

        let mid = 0.5 * (worst.a + worst.b);
        let left = rule.integrate(f, worst.a, mid);
        let right = rule.integrate(f, mid, worst.b);
        evaluations += left.evaluations + right.evaluations;

        total_value += left.value + right.value - worst.value;
        total_error += left.error + right.error - worst.error;

        heap.push(Interval {
            a: worst.a,
            b: mid,
            value: left.value,
            error: left.error,
        });
        heap.push(Interval {
            a: mid,
            b: worst.b,
            value: right.value,
            error: right.error,
        });
    }

    let (value, error) = heap
        .iter()
        .fold((0.0, 0.0), |(v, e), interval| (v + interval.value, e + interval.error));

    AdaptiveResult {
        value,
        error,
        evaluations,
        intervals: heap.len(),
        converged: error <= tolerance(value),
    }
}
