//! # besselint-numeric
//!
//! Arbitrary precision real arithmetic for the besselint engine.
//!
//! This crate wraps `astro-float` to provide:
//! - A working precision expressed in significant decimal digits (`WorkingPrecision`)
//! - An arbitrary precision real number (`Real`)
//! - An arithmetic context that performs every operation at the configured
//!   precision (`Arithmetic`)
//!
//! Precision is always explicit: there is no global setting. Two `Arithmetic`
//! values with different precisions can coexist in one process.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod arithmetic;
pub mod error;
pub mod precision;
pub mod real;

#[cfg(test)]
mod proptests;

pub use arithmetic::Arithmetic;
pub use error::NumericError;
pub use precision::WorkingPrecision;
pub use real::Real;
