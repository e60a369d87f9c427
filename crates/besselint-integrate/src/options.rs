//! Evaluation options.

use crate::guard::PrecisionGuard;

/// Working precision used by the reference implementation of these formulas.
pub const DEFAULT_WORKING_DIGITS: usize = 200;

/// Digits that must survive cancellation: roughly double precision.
pub const DEFAULT_MIN_REMAINING_DIGITS: i64 = 13;

/// Options for customizing evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Significant decimal digits carried by every operation.
    pub working_digits: usize,
    /// Minimum digits that must remain after cancellation for a value to be
    /// returned. An absolute floor, independent of `working_digits`.
    pub min_remaining_digits: i64,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            working_digits: DEFAULT_WORKING_DIGITS,
            min_remaining_digits: DEFAULT_MIN_REMAINING_DIGITS,
        }
    }
}

impl EvaluationOptions {
    /// Returns these options with a different working precision.
    #[must_use]
    pub fn with_working_digits(mut self, digits: usize) -> Self {
        self.working_digits = digits;
        self
    }

    /// Returns these options with a different cancellation threshold.
    #[must_use]
    pub fn with_min_remaining_digits(mut self, digits: i64) -> Self {
        self.min_remaining_digits = digits;
        self
    }

    /// Returns the precision guard these options describe.
    #[must_use]
    pub fn guard(&self) -> PrecisionGuard {
        PrecisionGuard::new(self.min_remaining_digits)
    }
}
