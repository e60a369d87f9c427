//! Evaluation engine.
//!
//! Routes a request for ∫ xⁿ jₗ(ax) jₗ(bx) dx to the tabulated closed form
//! for (n, l), falling back to the direct form for n = 2, and evaluates the
//! antiderivative at both bounds.

use besselint_numeric::{Arithmetic, Real};
use tracing::{debug, instrument};

use crate::closed_form::quadratic_antiderivative;
use crate::context::EvaluationContext;
use crate::error::{IntegralError, IntegralResult};
use crate::guard::{Antiderivative, PrecisionGuard};
use crate::options::EvaluationOptions;
use crate::table::IntegralTable;

/// Evaluates closed-form integrals at a fixed working precision.
///
/// An `Integrator` owns its arithmetic context and is meant to be used from
/// one thread; the table it reads is shared.
#[derive(Debug)]
pub struct Integrator<'t> {
    table: &'t IntegralTable,
    options: EvaluationOptions,
    guard: PrecisionGuard,
    arithmetic: Arithmetic,
}

impl Integrator<'static> {
    /// Creates an integrator over the built-in table.
    ///
    /// # Errors
    ///
    /// Returns [`IntegralError::Numeric`] if `options.working_digits` is zero.
    pub fn new(options: EvaluationOptions) -> IntegralResult<Self> {
        Self::with_table(IntegralTable::builtin(), options)
    }
}

impl<'t> Integrator<'t> {
    /// Creates an integrator over a caller-supplied table.
    ///
    /// # Errors
    ///
    /// Returns [`IntegralError::Numeric`] if `options.working_digits` is zero.
    pub fn with_table(table: &'t IntegralTable, options: EvaluationOptions) -> IntegralResult<Self> {
        let arithmetic = Arithmetic::with_digits(options.working_digits)?;
        let guard = options.guard();
        Ok(Self {
            table,
            options,
            guard,
            arithmetic,
        })
    }

    /// Returns the options this integrator was built with.
    #[must_use]
    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Returns the arithmetic context.
    #[must_use]
    pub fn arithmetic(&self) -> &Arithmetic {
        &self.arithmetic
    }

    /// Returns the table of closed forms.
    #[must_use]
    pub fn table(&self) -> &'t IntegralTable {
        self.table
    }

    /// Parses a decimal literal at the working precision.
    ///
    /// # Errors
    ///
    /// Returns [`IntegralError::Numeric`] if the literal is not a finite number.
    pub fn real(&self, literal: &str) -> IntegralResult<Real> {
        Ok(self.arithmetic.parse(literal)?)
    }

    /// Returns true if a closed form exists for (n, l).
    #[must_use]
    pub fn supports(&self, n: u32, l: u32) -> bool {
        n == 2 || self.table.contains(n, l)
    }

    /// Creates an evaluation context for (a, b), reusable across bounds.
    #[must_use]
    pub fn context(&self, a: &Real, b: &Real) -> EvaluationContext<'_> {
        EvaluationContext::new(a.clone(), b.clone(), &self.arithmetic)
    }

    /// Evaluates the antiderivative F(x) for (n, l) in `ctx`.
    ///
    /// A table entry takes precedence; n = 2 without one uses the direct
    /// closed form.
    ///
    /// # Errors
    ///
    /// Returns [`IntegralError::NotFound`] if no closed form exists, and any
    /// error of the evaluation itself.
    pub fn antiderivative(
        &self,
        n: u32,
        l: u32,
        ctx: &EvaluationContext<'_>,
        x: &Real,
    ) -> IntegralResult<Antiderivative> {
        match self.table.get(n, l) {
            Some(expression) => expression.evaluate(x, ctx, &self.guard),
            None if n == 2 => quadratic_antiderivative(l, x, ctx, &self.guard),
            None => Err(IntegralError::NotFound { n, l }),
        }
    }

    /// Computes ∫ xⁿ jₗ(ax) jₗ(bx) dx from `lower` to `upper`.
    ///
    /// # Errors
    ///
    /// - [`IntegralError::NotFound`] if (n, l) has no closed form.
    /// - [`IntegralError::DegenerateInputs`] if a bound is not positive, or
    ///   a = b, a = −b, or either scale is zero.
    /// - [`IntegralError::InsufficientPrecision`] if either bound fails the
    ///   cancellation guard.
    pub fn definite_integral(
        &self,
        n: u32,
        l: u32,
        a: &Real,
        b: &Real,
        lower: &Real,
        upper: &Real,
    ) -> IntegralResult<Real> {
        if !self.supports(n, l) {
            return Err(IntegralError::NotFound { n, l });
        }
        if !lower.is_positive() || !upper.is_positive() {
            return Err(IntegralError::DegenerateInputs("bounds must be positive"));
        }
        if a == b {
            return Err(IntegralError::DegenerateInputs("a and b must differ"));
        }
        if a.is_zero() || b.is_zero() {
            return Err(IntegralError::DegenerateInputs("a and b must be non-zero"));
        }
        if *a == b.neg() {
            return Err(IntegralError::DegenerateInputs("a + b must be non-zero"));
        }
        let ctx = self.context(a, b);
        self.definite_integral_in(n, l, &ctx, lower, upper)
    }

    /// Computes the definite integral in an existing context.
    ///
    /// Evaluation and certification run at the precision of the context's
    /// arithmetic, which need not be this integrator's.
    ///
    /// # Errors
    ///
    /// As [`antiderivative`](Self::antiderivative), at either bound.
    #[instrument(level = "debug", skip_all, fields(n = n, l = l))]
    pub fn definite_integral_in(
        &self,
        n: u32,
        l: u32,
        ctx: &EvaluationContext<'_>,
        lower: &Real,
        upper: &Real,
    ) -> IntegralResult<Real> {
        let at_upper = self.antiderivative(n, l, ctx, upper)?;
        let at_lower = self.antiderivative(n, l, ctx, lower)?;
        debug!(
            upper_digits_lost = at_upper.digits_lost,
            lower_digits_lost = at_lower.digits_lost,
            "definite integral evaluated"
        );
        Ok(ctx.arithmetic().sub(&at_upper.value, &at_lower.value))
    }
}
