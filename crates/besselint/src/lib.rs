//! # besselint
//!
//! Closed-form evaluation of
//!
//! ```text
//! ∫ xⁿ jₗ(ax) jₗ(bx) dx,   n ∈ {2, 4, 6},  0 ≤ l ≤ 10
//! ```
//!
//! in arbitrary precision, with every result certified against catastrophic
//! cancellation.
//!
//! ## Features
//!
//! - **Exact antiderivatives**: tabulated closed forms for n = 4, 6 and a
//!   direct form for n = 2
//! - **Explicit precision**: working digits are a parameter, never a global
//! - **Cancellation guard**: results that lost too many digits are refused,
//!   not returned
//! - **Validation oracle**: adaptive Gauss-Kronrod quadrature of the same
//!   integrand
//!
//! ## Quick Start
//!
//! ```rust
//! use besselint::prelude::*;
//!
//! let engine = Integrator::new(EvaluationOptions::default())?;
//! let a = engine.real("0.01")?;
//! let b = engine.real("50")?;
//! let lower = engine.real("1e-3")?;
//! let upper = engine.real("1e3")?;
//!
//! let value = engine.definite_integral(4, 0, &a, &b, &lower, &upper)?;
//! assert!((value.to_f64() + 381.442_397_153_012).abs() < 1e-9);
//! # Ok::<(), IntegralError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use besselint_integrate as integrate;
pub use besselint_numeric as numeric;
pub use besselint_special_func as special_func;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use besselint_integrate::{
        Antiderivative, EvaluationContext, EvaluationOptions, IntegralError, IntegralResult,
        IntegralTable, Integrator,
    };
    pub use besselint_numeric::{Arithmetic, Real};
}
