//! Closed-form antiderivatives built from four parts.
//!
//! With α = a + b and β = a − b, every tabulated antiderivative has the shape
//!
//! ```text
//! F(x) = 1/(4(ab)^(l+1)) · [ cos(αx)·(Sc + Dc)/α^(n-2) + cos(βx)·(Sc − Dc)/β^(n-2)
//!                          + sin(αx)·(Ss + Ds)/α^(n-1) + sin(βx)·(Ss − Ds)/β^(n-1) ]
//! ```
//!
//! where Sc, Dc, Ss, Ds are the cosine-sum, cosine-diff, sine-sum and
//! sine-diff parts. The four bracketed components are summed through a
//! [`PrecisionGuard`].

use besselint_numeric::Real;
use tracing::instrument;

use crate::context::EvaluationContext;
use crate::error::{IntegralError, IntegralResult};
use crate::guard::{Antiderivative, PrecisionGuard};
use crate::term::Part;

/// Role of a part within an [`IntegralExpression`], in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartRole {
    /// Sc: enters both cosine components with a plus sign.
    CosineSum,
    /// Dc: added under cos(αx), subtracted under cos(βx).
    CosineDiff,
    /// Ss: enters both sine components with a plus sign.
    SineSum,
    /// Ds: added under sin(αx), subtracted under sin(βx).
    SineDiff,
}

impl PartRole {
    /// All roles in storage order.
    pub const ALL: [PartRole; 4] = [
        PartRole::CosineSum,
        PartRole::CosineDiff,
        PartRole::SineSum,
        PartRole::SineDiff,
    ];

    fn index(self) -> usize {
        match self {
            PartRole::CosineSum => 0,
            PartRole::CosineDiff => 1,
            PartRole::SineSum => 2,
            PartRole::SineDiff => 3,
        }
    }
}

/// The antiderivative of xⁿ jₗ(ax) jₗ(bx) for one (n, l).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegralExpression {
    n: u32,
    l: u32,
    parts: [Part; 4],
}

impl IntegralExpression {
    /// Creates an expression from its four parts.
    #[must_use]
    pub fn new(
        n: u32,
        l: u32,
        cos_sum: Part,
        cos_diff: Part,
        sin_sum: Part,
        sin_diff: Part,
    ) -> Self {
        Self {
            n,
            l,
            parts: [cos_sum, cos_diff, sin_sum, sin_diff],
        }
    }

    /// Returns the power of x.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Returns the Bessel order.
    #[must_use]
    pub fn l(&self) -> u32 {
        self.l
    }

    /// Returns the part playing `role`.
    #[must_use]
    pub fn part(&self, role: PartRole) -> &Part {
        &self.parts[role.index()]
    }

    /// Returns the four scaled components whose sum is F(x), in the order
    /// cos(αx), cos(βx), sin(αx), sin(βx).
    ///
    /// # Errors
    ///
    /// Returns [`IntegralError::DegenerateInputs`] if `x ≤ 0`, `ab = 0`,
    /// `a + b = 0` or `a = b`.
    pub fn components(
        &self,
        x: &Real,
        ctx: &EvaluationContext<'_>,
    ) -> IntegralResult<[Real; 4]> {
        let ar = ctx.arithmetic();
        if !x.is_positive() {
            return Err(IntegralError::DegenerateInputs("x must be positive"));
        }
        if ctx.ab().is_zero() {
            return Err(IntegralError::DegenerateInputs("a and b must be non-zero"));
        }
        let alpha = ar.add(ctx.a(), ctx.b());
        let beta = ar.sub(ctx.a(), ctx.b());
        if alpha.is_zero() {
            return Err(IntegralError::DegenerateInputs("a + b must be non-zero"));
        }
        if beta.is_zero() {
            return Err(IntegralError::DegenerateInputs("a and b must differ"));
        }

        let cos_sum = self.part(PartRole::CosineSum).evaluate(x, ctx);
        let cos_diff = self.part(PartRole::CosineDiff).evaluate(x, ctx);
        let sin_sum = self.part(PartRole::SineSum).evaluate(x, ctx);
        let sin_diff = self.part(PartRole::SineDiff).evaluate(x, ctx);

        let n = i64::from(self.n);
        let alpha_x = ar.mul(&alpha, x);
        let beta_x = ar.mul(&beta, x);

        let components = [
            ar.div(
                &ar.mul(&ar.cos(&alpha_x), &ar.add(&cos_sum, &cos_diff)),
                &ar.powi(&alpha, n - 2),
            ),
            ar.div(
                &ar.mul(&ar.cos(&beta_x), &ar.sub(&cos_sum, &cos_diff)),
                &ar.powi(&beta, n - 2),
            ),
            ar.div(
                &ar.mul(&ar.sin(&alpha_x), &ar.add(&sin_sum, &sin_diff)),
                &ar.powi(&alpha, n - 1),
            ),
            ar.div(
                &ar.mul(&ar.sin(&beta_x), &ar.sub(&sin_sum, &sin_diff)),
                &ar.powi(&beta, n - 1),
            ),
        ];

        // 1 / (4 (ab)^(l+1))
        let scale = ar.recip(&ar.mul(
            &ar.from_i64(4),
            &ar.powi(ctx.ab(), i64::from(self.l) + 1),
        ));
        Ok(components.map(|component| ar.mul(&scale, &component)))
    }

    /// Evaluates F(x), certifying the cancellation between its components.
    ///
    /// # Errors
    ///
    /// Returns [`IntegralError::DegenerateInputs`] as for
    /// [`components`](Self::components), and
    /// [`IntegralError::InsufficientPrecision`] if the guard rejects the sum.
    #[instrument(level = "debug", skip_all, fields(n = self.n, l = self.l))]
    pub fn evaluate(
        &self,
        x: &Real,
        ctx: &EvaluationContext<'_>,
        guard: &PrecisionGuard,
    ) -> IntegralResult<Antiderivative> {
        let components = self.components(x, ctx)?;
        guard.certify(&components, ctx.arithmetic())
    }
}
