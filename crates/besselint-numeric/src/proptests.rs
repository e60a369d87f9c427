//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Arithmetic;

    fn arith() -> Arithmetic {
        Arithmetic::with_digits(60).expect("valid precision")
    }

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_arithmetic_is_exact(a in small_int(), b in small_int()) {
            let ar = arith();
            let x = ar.from_i64(a);
            let y = ar.from_i64(b);
            prop_assert_eq!(ar.add(&x, &y).to_f64(), (a + b) as f64);
            prop_assert_eq!(ar.mul(&x, &y).to_f64(), (a * b) as f64);
            prop_assert_eq!(ar.add(&x, &y), ar.add(&y, &x));
        }

        #[test]
        fn powi_exponent_law(base in non_zero_int(), p in 0i64..6, q in 0i64..6) {
            let ar = arith();
            let x = ar.from_i64(base);
            // |base|^10 < 2^100, so every power is exact at 60 digits.
            let lhs = ar.powi(&x, p + q);
            let rhs = ar.mul(&ar.powi(&x, p), &ar.powi(&x, q));
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn pythagorean_identity(num in small_int(), den in non_zero_int()) {
            let ar = arith();
            let x = ar.div(&ar.from_i64(num), &ar.from_i64(den));
            let s = ar.sin(&x);
            let c = ar.cos(&x);
            let one = ar.add(&ar.mul(&s, &s), &ar.mul(&c, &c));
            let residual = ar.sub(&one, &ar.one());
            let order = ar.order_of_magnitude(&residual).unwrap_or(i64::MIN);
            prop_assert!(order < -55, "residual order {}", order);
        }

        #[test]
        fn order_of_magnitude_matches_f64(mantissa in 1u64..10, exp in -80i32..80) {
            let ar = arith();
            let literal = format!("{mantissa}.5e{exp}");
            let x = ar.parse(&literal).unwrap();
            prop_assert_eq!(ar.order_of_magnitude(&x), Some(i64::from(exp)));
            prop_assert_eq!(ar.order_of_magnitude(&x.neg()), Some(i64::from(exp)));
        }
    }
}
