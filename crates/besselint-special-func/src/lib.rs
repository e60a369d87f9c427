//! Special Functions for besselint
//!
//! This crate provides the spherical Bessel functions of the first kind
//! jₗ(z) needed around the closed-form integrals:
//!
//! - **Arbitrary precision**: [`spherical_jn`] and [`spherical_jn_pair`],
//!   evaluated through a [`besselint_numeric::Arithmetic`]; these feed the
//!   direct n = 2 antiderivative.
//! - **Double precision**: [`spherical_jn_f64`] and [`spherical_jn_pair_f64`],
//!   for quadrature of the integrand when validating results.
//!
//! # Key Properties
//!
//! - j₀(z) = sin z / z
//! - jₗ(−z) = (−1)ˡ jₗ(z)
//! - jₗ(z) ~ zˡ/(2l+1)!! as z → 0

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod spherical_bessel;

pub use spherical_bessel::{
    spherical_jn, spherical_jn_f64, spherical_jn_minus_one, spherical_jn_pair,
    spherical_jn_pair_f64,
};
