//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use exacta_integers::Rational;
    use proptest::prelude::*;

    use crate::dense::Polynomial;

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-20i64..20i64, 1i64..6i64).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    // Strategy for generating small polynomials (degree 0-4)
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    // Strategy for generating monic linear factors x + c
    fn linear_factor() -> impl Strategy<Value = Polynomial> {
        (-5i64..5i64).prop_map(|c| Polynomial::new(vec![Rational::from(c), Rational::from(1)]))
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert!(a.sub(&a).is_zero());
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) over a field
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_mul_by_x_power(a in small_poly(), k in 0usize..6) {
            let shifted = a.shift(k).unwrap();
            let monomial = Polynomial::monomial(Rational::from(1), k).unwrap();
            prop_assert_eq!(shifted, a.mul(&monomial));
        }

        // Evaluation property

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a * b)(x) = a(x) * b(x)
            let product = a.mul(&b);
            prop_assert_eq!(product.eval(&x), a.eval(&x) * b.eval(&x));
        }

        // Division

        #[test]
        fn poly_division_identity(a in small_poly(), b in nonzero_poly()) {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r.is_zero() || r.degree() < b.degree());
            prop_assert_eq!(q.mul(&b).add(&r), a);
        }

        #[test]
        fn poly_gcd_divides_both(a in nonzero_poly(), b in nonzero_poly(), c in linear_factor()) {
            let ac = a.mul(&c);
            let bc = b.mul(&c);
            let g = ac.gcd(&bc).unwrap();
            prop_assert!(g.degree() >= 1);
            prop_assert!(ac.remainder(&g).unwrap().is_zero());
            prop_assert!(bc.remainder(&g).unwrap().is_zero());
        }

        // Derivative and squarefree

        #[test]
        fn poly_derivative_of_constant(c in small_coeff()) {
            prop_assert!(Polynomial::constant(c).derivative().is_zero());
        }

        #[test]
        fn poly_derivative_product_rule(a in small_poly(), b in small_poly()) {
            let left = a.mul(&b).derivative();
            let right = a.derivative().mul(&b).add(&a.mul(&b.derivative()));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_square_free_has_no_repeated_roots(
            a in linear_factor(),
            b in linear_factor(),
            k in 1u32..4
        ) {
            let f = a.pow(k + 1).mul(&b);
            let sf = f.make_square_free().unwrap();
            prop_assert!(sf.is_square_free());
            if sf.degree() > 0 {
                let g = sf.gcd(&sf.derivative()).unwrap();
                prop_assert_eq!(g.degree(), 0);
            }
        }

        #[test]
        fn poly_square_free_decomposition_reconstructs(
            a in linear_factor(),
            b in linear_factor(),
            k in 1u32..4
        ) {
            let f = a.pow(k).mul(&b.pow(2));
            let decomp = f.square_free_decomposition().unwrap();
            prop_assert_eq!(decomp.to_polynomial(), f);
        }

        #[test]
        fn poly_factor_out_is_integral(a in nonzero_poly()) {
            let p = a.factor_out().unwrap();
            for c in p.coeffs() {
                prop_assert!(c.is_integer());
            }
        }
    }
}
