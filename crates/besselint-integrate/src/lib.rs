//! Closed-form integrals of products of spherical Bessel functions.
//!
//! This crate evaluates
//!
//! ```text
//! ∫ xⁿ jₗ(ax) jₗ(bx) dx
//! ```
//!
//! for n ∈ {2, 4, 6} and l ≤ 10 from exact antiderivatives rather than
//! quadrature. Every antiderivative is a sum of components carried at a
//! configurable working precision; a [`PrecisionGuard`] measures how many
//! digits cancel in that sum and refuses results with too few left.
//!
//! # Quick Start
//!
//! ```
//! use besselint_integrate::{EvaluationOptions, Integrator};
//!
//! let engine = Integrator::new(EvaluationOptions::default()).unwrap();
//! let [a, b, lower, upper] = ["0.7", "1.9", "1", "6"].map(|s| engine.real(s).unwrap());
//!
//! // ∫₁⁶ x⁴ j₀(0.7x) j₀(1.9x) dx
//! let value = engine.definite_integral(4, 0, &a, &b, &lower, &upper).unwrap();
//! assert!((value.to_f64() - 10.500_376_325_509_159).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! - **context**: scale parameters and the cache of monomials in a², b²
//! - **term**: `c · xᵖ · (ab)ᵐ · poly(a², b²)` and sums of such terms
//! - **expression**: the four-part antiderivative shape for n = 4, 6
//! - **closed_form**: the direct antiderivative for n = 2
//! - **table**: built-in and injected expression tables
//! - **guard**: cancellation accounting
//! - **engine**: lookup and evaluation at both bounds
//! - **numerical**: adaptive Gauss-Kronrod quadrature used to validate results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod closed_form;
pub mod context;
pub mod engine;
pub mod error;
pub mod expression;
pub mod guard;
pub mod numerical;
pub mod options;
pub mod table;
pub mod term;

#[cfg(test)]
mod proptests;

pub use closed_form::quadratic_antiderivative;
pub use context::EvaluationContext;
pub use engine::Integrator;
pub use error::{IntegralError, IntegralResult};
pub use expression::{IntegralExpression, PartRole};
pub use guard::{Antiderivative, PrecisionGuard};
pub use options::{EvaluationOptions, DEFAULT_MIN_REMAINING_DIGITS, DEFAULT_WORKING_DIGITS};
pub use table::IntegralTable;
pub use term::{Exponent, Part, Term};
