//! Catastrophic-cancellation guard.
//!
//! A closed-form antiderivative is a sum of components that can be many
//! orders of magnitude larger than the sum itself, typically when a ≈ b or
//! when (a ± b)x sits near a multiple of π. Every digit of that gap is a
//! digit of the working precision that cancelled away:
//!
//! ```text
//! digits_lost = ⌊log₁₀ Σ|Tᵢ|⌋ − ⌊log₁₀ |ΣTᵢ|⌋
//! remaining   = working_digits − digits_lost
//! ```
//!
//! `working_digits` is the precision of the arithmetic that produced the
//! components, never a configured number, so a guard cannot vouch for a sum
//! computed at lower precision than it expects. The guard refuses to return
//! a sum whose `remaining` falls below the policy floor.

use besselint_numeric::{Arithmetic, Real};
use tracing::{debug, warn};

use crate::error::{IntegralError, IntegralResult};

/// An antiderivative value together with the precision it consumed.
#[derive(Clone, Debug, PartialEq)]
pub struct Antiderivative {
    /// The certified value.
    pub value: Real,
    /// Decimal digits lost to cancellation between components.
    pub digits_lost: i64,
    /// Working digits minus digits lost.
    pub remaining_digits: i64,
}

/// Cancellation policy: how many digits must survive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrecisionGuard {
    min_remaining_digits: i64,
}

impl PrecisionGuard {
    /// Creates a guard requiring `min_remaining_digits` to survive.
    #[must_use]
    pub fn new(min_remaining_digits: i64) -> Self {
        Self {
            min_remaining_digits,
        }
    }

    /// Returns the minimum number of digits that must survive.
    #[must_use]
    pub fn min_remaining_digits(&self) -> i64 {
        self.min_remaining_digits
    }

    /// Sums `components` and certifies the result against the precision of
    /// `ar`, which must be the arithmetic the components were computed in.
    ///
    /// All-zero components sum to an exact zero with nothing lost. A zero sum
    /// of non-zero components has lost every working digit.
    ///
    /// # Errors
    ///
    /// Returns [`IntegralError::InsufficientPrecision`] when fewer than
    /// `min_remaining_digits` digits survive, and
    /// [`IntegralError::DegenerateInputs`] if a component is not finite.
    pub fn certify(&self, components: &[Real], ar: &Arithmetic) -> IntegralResult<Antiderivative> {
        if components.iter().any(|c| !c.is_finite()) {
            return Err(IntegralError::DegenerateInputs(
                "antiderivative component is not finite",
            ));
        }

        let working_digits = i64::try_from(ar.digits()).unwrap_or(i64::MAX);
        let magnitudes: Vec<Real> = components.iter().map(Real::abs).collect();
        let total_magnitude = ar.sum(&magnitudes);
        let value = ar.sum(components);

        let digits_lost = match (
            ar.order_of_magnitude(&total_magnitude),
            ar.order_of_magnitude(&value),
        ) {
            (None, _) => 0,
            (Some(magnitude), Some(result)) => magnitude - result,
            (Some(_), None) => working_digits,
        };
        let remaining_digits = working_digits - digits_lost;

        if remaining_digits < self.min_remaining_digits {
            warn!(
                digits_lost,
                remaining_digits,
                required_digits = self.min_remaining_digits,
                "cancellation exceeds precision policy"
            );
            return Err(IntegralError::InsufficientPrecision {
                digits_lost,
                remaining_digits,
                required_digits: self.min_remaining_digits,
            });
        }

        debug!(digits_lost, remaining_digits, "antiderivative certified");
        Ok(Antiderivative {
            value,
            digits_lost,
            remaining_digits,
        })
    }
}
