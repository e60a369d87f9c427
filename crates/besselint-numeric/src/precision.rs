//! Working precision.
//!
//! Callers think in significant decimal digits; the floating point backend
//! works in bits rounded up to whole 64-bit words. The rounding can only add
//! precision, so a digit count derived from the configured digits, like the
//! cancellation guard's remaining digits, is a lower bound on what is carried.

use std::fmt;

use crate::NumericError;

const WORD_BITS: usize = 64;

/// Number of significant decimal digits carried by every operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkingPrecision {
    digits: usize,
}

impl WorkingPrecision {
    /// Creates a working precision of `digits` significant decimal digits.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidPrecision`] if `digits` is zero.
    pub fn new(digits: usize) -> Result<Self, NumericError> {
        if digits == 0 {
            return Err(NumericError::InvalidPrecision(digits));
        }
        Ok(Self { digits })
    }

    /// Returns the number of significant decimal digits.
    #[must_use]
    pub fn digits(self) -> usize {
        self.digits
    }

    /// Returns the binary precision handed to the backend.
    ///
    /// The bit count covering `digits`, rounded up to the next word.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn bits(self) -> usize {
        let base_bits = (self.digits as f64 * std::f64::consts::LOG2_10).ceil() as usize;
        base_bits.div_ceil(WORD_BITS) * WORD_BITS
    }
}

impl fmt::Display for WorkingPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} digits", self.digits)
    }
}
