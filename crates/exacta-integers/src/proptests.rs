//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::{Integer, Natural, Rational, Sign};

    // Strategy for generating long naturals as digit strings
    fn big_natural() -> impl Strategy<Value = Natural> {
        "[0-9]{1,40}".prop_map(|s| s.parse::<Natural>().unwrap())
    }

    fn big_nonzero_natural() -> impl Strategy<Value = Natural> {
        "[1-9][0-9]{0,30}".prop_map(|s| s.parse::<Natural>().unwrap())
    }

    fn big_integer() -> impl Strategy<Value = Integer> {
        (big_natural(), any::<bool>()).prop_map(|(m, neg)| Integer::from_parts(m, neg))
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
        // Natural primitives agree with machine arithmetic

        #[test]
        fn natural_matches_u64(a in 0u64..u32::MAX as u64, b in 0u64..u32::MAX as u64) {
            let na = Natural::new(a);
            let nb = Natural::new(b);
            prop_assert_eq!(&na + &nb, Natural::new(a + b));
            prop_assert_eq!(&na * &nb, Natural::new(a * b));
            prop_assert_eq!(na.cmp(&nb), a.cmp(&b));
            if b != 0 {
                prop_assert_eq!(na.quotient(&nb).unwrap(), Natural::new(a / b));
                prop_assert_eq!(na.remainder(&nb).unwrap(), Natural::new(a % b));
            }
        }

        #[test]
        fn natural_round_trip(a in big_natural()) {
            prop_assert_eq!(a.to_string().parse::<Natural>().unwrap(), a);
        }

        #[test]
        fn natural_equal_iff_difference_is_zero(a in big_natural(), b in big_natural()) {
            let equal = a.cmp(&b) == Ordering::Equal;
            let zero_difference = a.subtract(&b).map(|d| d.is_zero()).unwrap_or(false);
            prop_assert_eq!(equal, zero_difference);
        }

        #[test]
        fn natural_division_identity(a in big_natural(), b in big_nonzero_natural()) {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r < b);
            prop_assert_eq!(&(&b * &q) + &r, a);
        }

        #[test]
        fn natural_gcd_self(a in big_nonzero_natural()) {
            prop_assert_eq!(a.gcd(&a).unwrap(), a);
        }

        #[test]
        fn natural_gcd_times_lcm(a in big_nonzero_natural(), b in big_nonzero_natural()) {
            let g = a.gcd(&b).unwrap();
            let l = a.lcm(&b).unwrap();
            prop_assert_eq!(&g * &l, &a * &b);
            prop_assert!(a.remainder(&g).unwrap().is_zero());
            prop_assert!(b.remainder(&g).unwrap().is_zero());
        }

        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }

        #[test]
        fn integer_add_associative(a in big_integer(), b in big_integer(), c in big_integer()) {
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a.clone() + (b.clone() + c.clone())
            );
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn integer_additive_inverse(a in big_integer()) {
            let neg_a = a.negate();
            prop_assert!((a + neg_a).is_zero());
        }

        #[test]
        fn integer_product_sign(a in big_integer(), b in big_integer()) {
            let sign = (&a * &b).sign();
            let expected = match (a.sign(), b.sign()) {
                (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
                (x, y) if x == y => Sign::Positive,
                _ => Sign::Negative,
            };
            prop_assert_eq!(sign, expected);
        }

        #[test]
        fn integer_truncated_division(a in small_int(), b in non_zero_int()) {
            let (q, r) = Integer::new(a).div_rem(&Integer::new(b)).unwrap();
            prop_assert_eq!(q.to_i64(), Some(a / b));
            prop_assert_eq!(r.to_i64(), Some(a % b));
        }

        #[test]
        fn integer_round_trip(a in big_integer()) {
            prop_assert_eq!(a.to_string().parse::<Integer>().unwrap(), a);
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            prop_assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a).unwrap();
            let b = Rational::from_i64(num_b, den_b).unwrap();
            let c = Rational::from_i64(num_c, den_c).unwrap();
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b.clone() + a.clone() * c.clone()
            );
        }

        #[test]
        fn rational_reduce_idempotent(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den).unwrap();
            prop_assert_eq!(r.reduce().reduce(), r.reduce());
            let g = r.numerator().magnitude().gcd(r.denominator()).unwrap();
            prop_assert!(g.is_one());
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den).unwrap();
            let inv = a.recip().unwrap();
            let product = a * inv;
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_round_trip(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den).unwrap();
            prop_assert_eq!(r.to_fraction_string().parse::<Rational>().unwrap(), r.clone());
            prop_assert_eq!(r.to_string().parse::<Rational>().unwrap(), r);
        }
    }
}
