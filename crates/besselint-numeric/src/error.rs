//! Errors raised by the numeric layer.

use thiserror::Error;

/// Errors that can occur while setting up or feeding an [`Arithmetic`](crate::Arithmetic).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumericError {
    /// The requested working precision cannot be used.
    #[error("invalid working precision: {0} decimal digits")]
    InvalidPrecision(usize),

    /// A decimal literal could not be parsed.
    #[error("invalid decimal literal: {0:?}")]
    InvalidLiteral(String),

    /// The constants cache of the floating point backend failed to initialise.
    #[error("failed to initialise constants cache: {0}")]
    ConstantsInit(String),
}
