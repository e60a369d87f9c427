//! Numerical Integration
//!
//! Adaptive Gauss-Kronrod quadrature in double precision. The closed forms
//! never call into this module; it is the independent oracle their results
//! are checked against.
//!
//! # Example
//!
//! ```
//! use besselint_integrate::numerical::reference_integral;
//!
//! // ∫₁⁶ x⁴ j₀(0.7x) j₀(1.9x) dx
//! let result = reference_integral(4, 0, 0.7, 1.9, 1.0, 6.0, 1e-12, 1000);
//! assert!((result.value - 10.500_376_325_509_159).abs() < 1e-9);
//! ```

pub mod adaptive;
pub mod gauss_kronrod;
pub mod reference;

pub use adaptive::{adaptive_integrate, AdaptiveResult};
pub use gauss_kronrod::{GaussKronrodRule, RuleEstimate};
pub use reference::{bessel_integrand, reference_integral};
