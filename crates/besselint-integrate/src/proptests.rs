//! Property-based tests for closed-form evaluation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{EvaluationContext, EvaluationOptions, Integrator};
    use besselint_numeric::Arithmetic;

    fn arith() -> Arithmetic {
        Arithmetic::with_digits(60).expect("valid precision")
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-50i64..=-1i64), (1i64..=50i64)]
    }

    proptest! {
        #[test]
        fn monomials_follow_power_law(a in non_zero_int(), b in non_zero_int(), n in 0usize..8) {
            let ar = arith();
            let ctx = EvaluationContext::new(ar.from_i64(a), ar.from_i64(b), &ar);
            let monomials = ctx.monomials(n);
            prop_assert_eq!(monomials.len(), n);
            for (k, m) in monomials.iter().enumerate() {
                let a_exp = 2 * (n - 1 - k);
                let b_exp = 2 * k;
                // |a|, |b| ≤ 50 and total degree ≤ 14: exact in 60 digits.
                let expected = ar.mul(
                    &ar.powi(&ar.from_i64(a), i64::try_from(a_exp).unwrap()),
                    &ar.powi(&ar.from_i64(b), i64::try_from(b_exp).unwrap()),
                );
                prop_assert_eq!(m, &expected);
            }
        }

        #[test]
        fn weighted_sum_is_linear(
            a in non_zero_int(),
            b in non_zero_int(),
            weights in prop::collection::vec(-100i64..100, 1..6),
            scale in -20i64..20,
        ) {
            let ar = arith();
            let ctx = EvaluationContext::new(ar.from_i64(a), ar.from_i64(b), &ar);
            let scaled: Vec<i64> = weights.iter().map(|w| w * scale).collect();
            let lhs = ctx.weighted_sum(&scaled);
            let rhs = ar.mul(&ar.from_i64(scale), &ctx.weighted_sum(&weights));
            prop_assert!(ar.sub(&lhs, &rhs).is_zero());
        }
    }

    proptest! {
        // Each case evaluates four antiderivatives at 100 digits.
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn integral_is_antisymmetric_in_bounds(
            l in 0u32..=10,
            n in prop::sample::select(vec![2u32, 4, 6]),
            lower in 1u32..20,
            width in 1u32..20,
        ) {
            let engine = Integrator::new(EvaluationOptions::default().with_working_digits(100))
                .expect("valid options");
            let ar = engine.arithmetic();
            let (a, b) = (engine.real("0.7").unwrap(), engine.real("1.9").unwrap());
            let x0 = ar.div(&ar.from_u64(u64::from(lower)), &ar.from_i64(4));
            let x1 = ar.add(&x0, &ar.div(&ar.from_u64(u64::from(width)), &ar.from_i64(4)));
            let forward = engine.definite_integral(n, l, &a, &b, &x0, &x1).unwrap();
            let backward = engine.definite_integral(n, l, &a, &b, &x1, &x0).unwrap();
            prop_assert_eq!(forward, backward.neg());
        }
    }
}
