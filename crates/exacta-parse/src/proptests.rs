//! Property-based tests for literal validation.

#[cfg(test)]
mod tests {
    use exacta_integers::{Integer, Natural, Rational};
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::validator::{integer, natural, polynomial_coefficients, rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Strategy for generating (coefficient, degree) terms with distinct degrees
    fn terms() -> impl Strategy<Value = Vec<(i64, i64, usize)>> {
        proptest::collection::btree_map(0usize..8, (small_int(), 1i64..9), 1..5).prop_map(|m| {
            m.into_iter().map(|(deg, (n, d))| (n, d, deg)).collect()
        })
    }

    fn render(terms: &[(i64, i64, usize)]) -> String {
        let mut out = String::new();
        for (i, &(n, d, deg)) in terms.iter().enumerate() {
            if n < 0 {
                out.push('-');
            } else if i > 0 {
                out.push('+');
            }
            out.push_str(&format!("{}/{}", n.unsigned_abs(), d));
            match deg {
                0 => {}
                1 => out.push('x'),
                _ => out.push_str(&format!("x^{deg}")),
            }
        }
        out
    }

    proptest! {
        #[test]
        fn natural_ignores_leading_zeros(n in 0u64..1_000_000, zeros in 0usize..4) {
            let literal = format!("{}{}", "0".repeat(zeros), n);
            prop_assert_eq!(natural(&literal).unwrap(), Natural::new(n));
        }

        #[test]
        fn integer_round_trip(n in small_int()) {
            let value = Integer::new(n);
            prop_assert_eq!(integer(&value.to_string()).unwrap(), value);
        }

        #[test]
        fn rational_round_trip(n in small_int(), d in non_zero_int()) {
            let value = Rational::from_i64(n, d).unwrap();
            prop_assert_eq!(rational(&value.to_fraction_string()).unwrap(), value);
        }

        #[test]
        fn polynomial_places_terms_by_degree(terms in terms()) {
            let literal = render(&terms);
            match polynomial_coefficients(&literal) {
                Ok(coeffs) => {
                    prop_assert!(!coeffs.last().unwrap().is_zero());
                    for &(n, d, deg) in &terms {
                        let expected = Rational::from_i64(n, d).unwrap();
                        let actual = coeffs.get(deg).cloned().unwrap_or_default();
                        prop_assert_eq!(actual, expected);
                    }
                }
                Err(e) => {
                    prop_assert_eq!(e, crate::ParseError::AllZero);
                    prop_assert!(terms.iter().all(|&(n, _, _)| n == 0));
                }
            }
        }

        #[test]
        fn lexer_never_panics(s in "[0-9x+\\-*/^ ]{0,16}") {
            let _ = polynomial_coefficients(&s);
        }
    }
}
