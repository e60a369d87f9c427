//! Table of closed-form antiderivatives keyed by (n, l).
//!
//! The built-in table covers n ∈ {4, 6} and l ∈ 0..=10. Its coefficients live
//! in the `n4` and `n6` data modules, written with the `expression!` macro:
//!
//! ```text
//! expression!(4, 0;
//!     cos_sum: [],
//!     cos_diff: [(-4, 1, 0)],
//!     sin_sum: [(-4, 2, 1)],
//!     sin_diff: [(4, 0, 0), (-2, 2, 0, [1, 1])],
//! )
//! ```
//!
//! where each tuple is `(coefficient, power of x, power of ab)` with optional
//! polynomial weights.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::expression::IntegralExpression;

macro_rules! expression {
    (@term ($c:expr, $p:expr, $m:expr, [$($w:expr),* $(,)?])) => {
        $crate::term::Term::new($c, $p, $m, &[$($w),*])
    };
    (@term ($c:expr, $p:expr, $m:expr)) => {
        $crate::term::Term::new($c, $p, $m, &[])
    };
    (@part [$($t:tt),*]) => {
        $crate::term::Part::new(vec![$(expression!(@term $t)),*])
    };
    ($n:literal, $l:literal;
        cos_sum: [$($cs:tt),* $(,)?],
        cos_diff: [$($cd:tt),* $(,)?],
        sin_sum: [$($ss:tt),* $(,)?],
        sin_diff: [$($sd:tt),* $(,)?] $(,)?
    ) => {
        $crate::expression::IntegralExpression::new(
            $n,
            $l,
            expression!(@part [$($cs),*]),
            expression!(@part [$($cd),*]),
            expression!(@part [$($ss),*]),
            expression!(@part [$($sd),*]),
        )
    };
}

mod n4;
mod n6;

/// An immutable mapping from (n, l) to the antiderivative of xⁿ jₗ(ax) jₗ(bx).
#[derive(Clone, Debug, Default)]
pub struct IntegralTable {
    entries: FxHashMap<(u32, u32), IntegralExpression>,
}

impl IntegralTable {
    /// Returns the built-in table, built on first use.
    #[must_use]
    pub fn builtin() -> &'static IntegralTable {
        static BUILTIN: OnceLock<IntegralTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_expressions(n4::expressions().into_iter().chain(n6::expressions()))
        })
    }

    /// Builds a table from expressions, keyed by their own (n, l).
    ///
    /// A later expression for the same key replaces an earlier one.
    #[must_use]
    pub fn from_expressions(expressions: impl IntoIterator<Item = IntegralExpression>) -> Self {
        let entries = expressions
            .into_iter()
            .map(|expression| ((expression.n(), expression.l()), expression))
            .collect();
        Self { entries }
    }

    /// Returns the expression for (n, l), if tabulated.
    #[must_use]
    pub fn get(&self, n: u32, l: u32) -> Option<&IntegralExpression> {
        self.entries.get(&(n, l))
    }

    /// Returns true if (n, l) is tabulated.
    #[must_use]
    pub fn contains(&self, n: u32, l: u32) -> bool {
        self.entries.contains_key(&(n, l))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns every tabulated (n, l), sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<(u32, u32)> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::PartRole;
    use crate::term::{Part, Term};

    #[test]
    fn test_builtin_coverage() {
        let table = IntegralTable::builtin();
        assert_eq!(table.len(), 22);
        let expected: Vec<(u32, u32)> = [4, 6]
            .into_iter()
            .flat_map(|n| (0..=10).map(move |l| (n, l)))
            .collect();
        assert_eq!(table.keys(), expected);
        for (n, l) in expected {
            let expression = table.get(n, l).unwrap();
            assert_eq!((expression.n(), expression.l()), (n, l));
        }
        assert!(!table.contains(2, 0));
        assert!(table.get(8, 0).is_none());
        assert!(table.get(4, 11).is_none());
    }

    #[test]
    fn test_builtin_entry_literals() {
        let expression = IntegralTable::builtin().get(4, 2).unwrap();
        let sin_diff = expression.part(PartRole::SineDiff).terms();
        assert_eq!(sin_diff.len(), 2);
        assert_eq!(sin_diff[0], Term::new(-2, 2, 2, &[1, 1]));
        assert_eq!(sin_diff[1], Term::new(2, 0, 0, &[3, 32, 3]));

        let cos_sum = expression.part(PartRole::CosineSum).terms();
        assert_eq!(cos_sum[0], Term::new(36, -1, 1, &[]));
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(IntegralTable::builtin(), IntegralTable::builtin()));
    }

    #[test]
    fn test_custom_table() {
        let first = IntegralExpression::new(
            2,
            0,
            Part::default(),
            Part::default(),
            Part::default(),
            Part::default(),
        );
        let replacement = IntegralExpression::new(
            2,
            0,
            Part::new(vec![Term::new(1, 0, 0, &[])]),
            Part::default(),
            Part::default(),
            Part::default(),
        );
        let table = IntegralTable::from_expressions([first, replacement.clone()]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(2, 0), Some(&replacement));
        assert!(IntegralTable::default().is_empty());
    }

    #[test]
    fn test_table_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IntegralTable>();
    }
}
