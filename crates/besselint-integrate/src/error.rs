//! Errors raised while evaluating closed-form integrals.

use besselint_numeric::NumericError;
use thiserror::Error;

/// Errors that can occur while evaluating an integral.
///
/// No variant carries a numeric result: a value is either certified or not
/// returned at all.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntegralError {
    /// Cancellation between the components of an antiderivative destroyed
    /// more digits than the configured policy allows. Retrying with a higher
    /// working precision may succeed.
    #[error(
        "insufficient precision: {digits_lost} digits cancelled, \
         {remaining_digits} remain but {required_digits} are required"
    )]
    InsufficientPrecision {
        /// Decimal digits lost to cancellation.
        digits_lost: i64,
        /// Working digits minus digits lost.
        remaining_digits: i64,
        /// The policy threshold that was not met.
        required_digits: i64,
    },

    /// The parameters make the closed form singular.
    #[error("degenerate inputs: {0}")]
    DegenerateInputs(&'static str),

    /// No closed form is available for the requested (n, l).
    #[error("no closed form available for n = {n}, l = {l}")]
    NotFound {
        /// Power of x.
        n: u32,
        /// Order of the spherical Bessel functions.
        l: u32,
    },

    /// The numeric layer rejected a precision or a literal.
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

impl IntegralError {
    /// Returns true if the same call may succeed at a higher working precision.
    #[must_use]
    pub fn is_precision_failure(&self) -> bool {
        matches!(self, IntegralError::InsufficientPrecision { .. })
    }
}

/// Result alias used throughout the crate.
pub type IntegralResult<T> = Result<T, IntegralError>;
